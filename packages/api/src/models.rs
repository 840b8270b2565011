//! Data model of the platform API.
//!
//! Plain value records mirroring the backend's JSON (`camelCase` keys). The
//! backend owns all consistency; nothing here is validated client-side beyond
//! deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user as seen by administrators (and by the user themselves).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRead {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

impl UserRead {
    /// Project onto the public, read-only view of this user.
    pub fn to_public(&self) -> UserReadPublic {
        UserReadPublic {
            id: self.id.clone(),
            username: self.username.clone(),
            name: Some(self.name.clone()),
            affiliation: self.affiliation.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// Public projection of a user, safe to show to anyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReadPublic {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserReadPublic {
    /// Best human-readable name for display.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// One page of user search results. Replaced wholesale on every search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchPage<U> {
    pub users: Vec<U>,
    pub total: usize,
}

impl<U> Default for UserSearchPage<U> {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            total: 0,
        }
    }
}

/// Filters for the administrative user search (`GET /users`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserSearchFilters {
    pub query: String,
    /// Restrict results to active accounts.
    pub active_only: bool,
    pub page: usize,
    pub page_size: usize,
}

/// Query for the public user search (`GET /users/public`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PublicUserSearchQuery {
    pub query: String,
    /// Whether an empty query should list everyone. When unset, an empty
    /// query never reaches the network.
    pub empty_ok: bool,
    pub page: usize,
    pub page_size: usize,
}

impl PublicUserSearchQuery {
    /// Whether this query reaches the network at all: an empty query only
    /// does when `empty_ok` is set.
    pub fn hits_network(&self) -> bool {
        self.empty_ok || !self.query.trim().is_empty()
    }
}

/// Platform configuration and metadata, fetched once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformData {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub texts: Vec<TextRead>,
    #[serde(default)]
    pub default_text_id: Option<String>,
}

impl PlatformData {
    /// The text to present when none is selected: the configured default,
    /// falling back to the first available text.
    pub fn default_text(&self) -> Option<&TextRead> {
        self.default_text_id
            .as_ref()
            .and_then(|id| self.texts.iter().find(|t| &t.id == id))
            .or_else(|| self.texts.first())
    }
}

/// A text available on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRead {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Labels of the text's structure levels, top to bottom.
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
}

/// The resource/content type tag.
///
/// A closed set: unknown tags coming from the server simply fail lookup
/// (no component, no panic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    PlainText,
    RichText,
    TextAnnotation,
    Audio,
    Images,
    ApiCall,
    DeeplLinks,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::PlainText,
        ResourceKind::RichText,
        ResourceKind::TextAnnotation,
        ResourceKind::Audio,
        ResourceKind::Images,
        ResourceKind::ApiCall,
        ResourceKind::DeeplLinks,
    ];

    /// The wire tag for this kind.
    pub fn as_tag(self) -> &'static str {
        match self {
            ResourceKind::PlainText => "plainText",
            ResourceKind::RichText => "richText",
            ResourceKind::TextAnnotation => "textAnnotation",
            ResourceKind::Audio => "audio",
            ResourceKind::Images => "images",
            ResourceKind::ApiCall => "apiCall",
            ResourceKind::DeeplLinks => "deeplLinks",
        }
    }

    /// Parse a wire tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_tag() == tag)
    }
}

/// A unit of content attached to a resource at one text location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRead {
    pub id: String,
    pub resource_id: String,
    pub location_id: String,
    #[serde(flatten)]
    pub payload: ContentPayload,
}

impl ContentRead {
    pub fn kind(&self) -> ResourceKind {
        self.payload.kind()
    }
}

/// Kind-specific content payload, tagged by `resourceType` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resourceType", rename_all = "camelCase")]
pub enum ContentPayload {
    #[serde(rename_all = "camelCase")]
    PlainText { text: String },
    #[serde(rename_all = "camelCase")]
    RichText { html: String },
    #[serde(rename_all = "camelCase")]
    TextAnnotation { tokens: Vec<AnnotationToken> },
    #[serde(rename_all = "camelCase")]
    Audio { files: Vec<MediaFile> },
    #[serde(rename_all = "camelCase")]
    Images { files: Vec<MediaFile> },
    #[serde(rename_all = "camelCase")]
    ApiCall {
        endpoint: String,
        method: String,
        #[serde(default)]
        query: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    DeeplLinks {
        source_language: String,
        #[serde(default)]
        target_languages: Vec<String>,
    },
}

impl ContentPayload {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ContentPayload::PlainText { .. } => ResourceKind::PlainText,
            ContentPayload::RichText { .. } => ResourceKind::RichText,
            ContentPayload::TextAnnotation { .. } => ResourceKind::TextAnnotation,
            ContentPayload::Audio { .. } => ResourceKind::Audio,
            ContentPayload::Images { .. } => ResourceKind::Images,
            ContentPayload::ApiCall { .. } => ResourceKind::ApiCall,
            ContentPayload::DeeplLinks { .. } => ResourceKind::DeeplLinks,
        }
    }
}

/// A token of an annotated text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationToken {
    pub token: String,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

/// A referenced media file (audio or image).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Contents present at one browse location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    #[serde(default)]
    pub location_label: Option<String>,
    #[serde(default)]
    pub contents: Vec<ContentRead>,
}

/// One hit of the quick search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub text_id: String,
    pub location_label: String,
    pub content: ContentRead,
}
