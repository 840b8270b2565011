//! The authoritative resource-kind registry.
//!
//! One capability record per [`ResourceKind`] bundles everything the client
//! can do with that kind: read rendering, the editing form, the search form,
//! and the default payload template. Keeping all concerns in a single record
//! means adding a kind is one enum variant plus one record — the exhaustive
//! `match` in [`capabilities`] makes an incomplete registry a compile error.
//!
//! Lookup by raw tag string stays fallible: an unknown tag from the server
//! yields `None` and the content simply renders nothing.

use api::{ContentPayload, ContentRead, ResourceKind};
use dioxus::prelude::*;

use crate::content;

/// Everything the client knows how to do with one resource kind.
pub struct ResourceCapabilities {
    pub kind: ResourceKind,
    /// Human-readable kind label (not translated; catalog keys wrap this).
    pub label: &'static str,
    pub render: fn(&ContentRead) -> Element,
    pub edit_form: fn(Signal<ContentRead>) -> Element,
    pub search_form: fn(Signal<String>) -> Element,
    pub default_payload: fn() -> ContentPayload,
}

static PLAIN_TEXT: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::PlainText,
    label: "Plain text",
    render: content::render_plain_text,
    edit_form: content::edit_plain_text,
    search_form: content::search_text,
    default_payload: content::default_plain_text,
};

static RICH_TEXT: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::RichText,
    label: "Rich text",
    render: content::render_rich_text,
    edit_form: content::edit_rich_text,
    search_form: content::search_text,
    default_payload: content::default_rich_text,
};

static TEXT_ANNOTATION: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::TextAnnotation,
    label: "Text annotation",
    render: content::render_text_annotation,
    edit_form: content::edit_text_annotation,
    search_form: content::search_annotations,
    default_payload: content::default_text_annotation,
};

static AUDIO: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::Audio,
    label: "Audio",
    render: content::render_audio,
    edit_form: content::edit_audio,
    search_form: content::search_captions,
    default_payload: content::default_audio,
};

static IMAGES: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::Images,
    label: "Images",
    render: content::render_images,
    edit_form: content::edit_images,
    search_form: content::search_captions,
    default_payload: content::default_images,
};

static API_CALL: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::ApiCall,
    label: "API call",
    render: content::render_api_call,
    edit_form: content::edit_api_call,
    search_form: content::search_endpoints,
    default_payload: content::default_api_call,
};

static DEEPL_LINKS: ResourceCapabilities = ResourceCapabilities {
    kind: ResourceKind::DeeplLinks,
    label: "DeepL links",
    render: content::render_deepl_links,
    edit_form: content::edit_deepl_links,
    search_form: content::search_text,
    default_payload: content::default_deepl_links,
};

/// Capability record for a kind. Total over [`ResourceKind`].
pub fn capabilities(kind: ResourceKind) -> &'static ResourceCapabilities {
    match kind {
        ResourceKind::PlainText => &PLAIN_TEXT,
        ResourceKind::RichText => &RICH_TEXT,
        ResourceKind::TextAnnotation => &TEXT_ANNOTATION,
        ResourceKind::Audio => &AUDIO,
        ResourceKind::Images => &IMAGES,
        ResourceKind::ApiCall => &API_CALL,
        ResourceKind::DeeplLinks => &DEEPL_LINKS,
    }
}

/// Look up by raw wire tag. Unknown tags yield `None`.
pub fn capabilities_for_tag(tag: &str) -> Option<&'static ResourceCapabilities> {
    ResourceKind::from_tag(tag).map(capabilities)
}

/// Render a content unit through its kind's read component.
pub fn render_content(content: &ContentRead) -> Element {
    (capabilities(content.kind()).render)(content)
}

/// The default payload template for a kind (new-content drafts).
pub fn default_payload(kind: ResourceKind) -> ContentPayload {
    (capabilities(kind).default_payload)()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent_for_every_kind() {
        for kind in ResourceKind::ALL {
            let caps = capabilities(kind);
            assert_eq!(caps.kind, kind);
            assert_eq!(default_payload(kind).kind(), kind);
            assert!(!caps.label.is_empty());
        }
    }

    #[test]
    fn test_tag_lookup() {
        let caps = capabilities_for_tag("textAnnotation").unwrap();
        assert_eq!(caps.kind, ResourceKind::TextAnnotation);
        assert!(capabilities_for_tag("unknownKind").is_none());
    }
}
