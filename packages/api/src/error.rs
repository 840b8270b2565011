//! Error type for the REST client.

use thiserror::Error;

/// Failure of a single API request.
///
/// Views generally collapse this to a boolean error flag; only platform-data
/// loading propagates it to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure or response body that could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with an unexpected status code.
    #[error("unexpected status {status} from {path}")]
    Status { status: u16, path: String },
}

impl ApiError {
    /// Whether this error is a 401 (expired or missing session).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}
