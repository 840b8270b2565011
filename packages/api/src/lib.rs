//! # API crate — typed REST client for the Tekst web client
//!
//! Everything the frontend knows about the backend lives here: the data
//! model, the endpoint methods, and the deployment path resolution.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: typed endpoint methods, session-expiry interception, asset probing |
//! | [`env`] | [`PathResolution`]: base/static/API path derivation from the document base href |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | Value records mirroring the backend JSON, including the [`ResourceKind`] tag set |

pub mod client;
pub mod env;
pub mod error;
pub mod models;

pub use client::{ApiClient, LOGOUT_PATH};
pub use env::PathResolution;
pub use error::ApiError;
pub use models::{
    AnnotationToken, ContentPayload, ContentRead, LocationData, MediaFile, PlatformData,
    PublicUserSearchQuery, ResourceKind, SearchHit, TextRead, UserRead, UserReadPublic,
    UserSearchFilters, UserSearchPage,
};
