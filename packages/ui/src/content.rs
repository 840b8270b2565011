//! Per-kind content components: read rendering, edit forms, search forms,
//! and default payload templates. Wired up by [`crate::registry`].

use api::{AnnotationToken, ContentPayload, ContentRead, MediaFile};
use dioxus::prelude::*;

// --- read rendering ---------------------------------------------------------

pub(crate) fn render_plain_text(content: &ContentRead) -> Element {
    let ContentPayload::PlainText { text } = &content.payload else {
        return rsx! {};
    };
    rsx! {
        div { class: "content content--plain-text", "{text}" }
    }
}

pub(crate) fn render_rich_text(content: &ContentRead) -> Element {
    let ContentPayload::RichText { html } = &content.payload else {
        return rsx! {};
    };
    // backend-sanitized HTML
    rsx! {
        div { class: "content content--rich-text", dangerous_inner_html: "{html}" }
    }
}

pub(crate) fn render_text_annotation(content: &ContentRead) -> Element {
    let ContentPayload::TextAnnotation { tokens } = &content.payload else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "content content--text-annotation",
            for (i, token) in tokens.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "annotation-token",
                    title: token.annotations.iter()
                        .map(|(k, v)| format!("{k}: {v}"))
                        .collect::<Vec<_>>()
                        .join(", "),
                    "{token.token}"
                }
            }
        }
    }
}

pub(crate) fn render_audio(content: &ContentRead) -> Element {
    let ContentPayload::Audio { files } = &content.payload else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "content content--audio",
            for file in files {
                figure {
                    key: "{file.url}",
                    audio { controls: true, src: "{file.url}" }
                    if let Some(caption) = &file.caption {
                        figcaption { "{caption}" }
                    }
                }
            }
        }
    }
}

pub(crate) fn render_images(content: &ContentRead) -> Element {
    let ContentPayload::Images { files } = &content.payload else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "content content--images",
            for file in files {
                figure {
                    key: "{file.url}",
                    img { src: "{file.url}", alt: file.caption.clone().unwrap_or_default() }
                    if let Some(caption) = &file.caption {
                        figcaption { "{caption}" }
                    }
                }
            }
        }
    }
}

pub(crate) fn render_api_call(content: &ContentRead) -> Element {
    let ContentPayload::ApiCall { endpoint, method, query } = &content.payload else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "content content--api-call",
            code { "{method} {endpoint}" }
            if let Some(query) = query {
                pre { "{query}" }
            }
        }
    }
}

pub(crate) fn render_deepl_links(content: &ContentRead) -> Element {
    let ContentPayload::DeeplLinks { source_language, target_languages } = &content.payload
    else {
        return rsx! {};
    };
    rsx! {
        ul {
            class: "content content--deepl-links",
            for target in target_languages {
                li {
                    key: "{target}",
                    a {
                        href: "https://www.deepl.com/translator#{source_language}/{target}/",
                        target: "_blank",
                        "{source_language} → {target}"
                    }
                }
            }
        }
    }
}

// --- edit forms -------------------------------------------------------------

fn media_files_from_lines(value: &str) -> Vec<MediaFile> {
    value
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|url| MediaFile {
            url: url.to_string(),
            caption: None,
        })
        .collect()
}

fn media_files_to_lines(files: &[MediaFile]) -> String {
    files
        .iter()
        .map(|f| f.url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn edit_plain_text(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::PlainText { text } = draft().payload else {
        return rsx! {};
    };
    rsx! {
        textarea {
            class: "content-edit content-edit--plain-text",
            value: "{text}",
            oninput: move |e| {
                draft.write().payload = ContentPayload::PlainText { text: e.value() };
            },
        }
    }
}

pub(crate) fn edit_rich_text(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::RichText { html } = draft().payload else {
        return rsx! {};
    };
    rsx! {
        textarea {
            class: "content-edit content-edit--rich-text",
            value: "{html}",
            oninput: move |e| {
                draft.write().payload = ContentPayload::RichText { html: e.value() };
            },
        }
    }
}

/// Tokens are edited as whitespace-separated plain text; annotations of
/// removed tokens are dropped, annotations of kept tokens are preserved by
/// position.
pub(crate) fn edit_text_annotation(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::TextAnnotation { tokens } = draft().payload else {
        return rsx! {};
    };
    let joined = tokens
        .iter()
        .map(|t| t.token.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    rsx! {
        textarea {
            class: "content-edit content-edit--text-annotation",
            value: "{joined}",
            oninput: move |e| {
                let previous = match &draft().payload {
                    ContentPayload::TextAnnotation { tokens } => tokens.clone(),
                    _ => Vec::new(),
                };
                let tokens = e
                    .value()
                    .split_whitespace()
                    .enumerate()
                    .map(|(i, token)| AnnotationToken {
                        token: token.to_string(),
                        annotations: previous
                            .get(i)
                            .map(|t| t.annotations.clone())
                            .unwrap_or_default(),
                    })
                    .collect();
                draft.write().payload = ContentPayload::TextAnnotation { tokens };
            },
        }
    }
}

pub(crate) fn edit_audio(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::Audio { files } = draft().payload else {
        return rsx! {};
    };
    rsx! {
        textarea {
            class: "content-edit content-edit--audio",
            placeholder: "One audio file URL per line",
            value: media_files_to_lines(&files),
            oninput: move |e| {
                draft.write().payload = ContentPayload::Audio {
                    files: media_files_from_lines(&e.value()),
                };
            },
        }
    }
}

pub(crate) fn edit_images(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::Images { files } = draft().payload else {
        return rsx! {};
    };
    rsx! {
        textarea {
            class: "content-edit content-edit--images",
            placeholder: "One image URL per line",
            value: media_files_to_lines(&files),
            oninput: move |e| {
                draft.write().payload = ContentPayload::Images {
                    files: media_files_from_lines(&e.value()),
                };
            },
        }
    }
}

pub(crate) fn edit_api_call(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::ApiCall { endpoint, method, query } = draft().payload else {
        return rsx! {};
    };
    let query_value = query.clone().unwrap_or_default();
    rsx! {
        div {
            class: "content-edit content-edit--api-call",
            input {
                placeholder: "Method",
                value: "{method}",
                oninput: move |e| {
                    if let ContentPayload::ApiCall { method, .. } = &mut draft.write().payload {
                        *method = e.value();
                    }
                },
            }
            input {
                placeholder: "Endpoint",
                value: "{endpoint}",
                oninput: move |e| {
                    if let ContentPayload::ApiCall { endpoint, .. } = &mut draft.write().payload {
                        *endpoint = e.value();
                    }
                },
            }
            textarea {
                placeholder: "Query",
                value: "{query_value}",
                oninput: move |e| {
                    if let ContentPayload::ApiCall { query, .. } = &mut draft.write().payload {
                        let value = e.value();
                        *query = (!value.is_empty()).then_some(value);
                    }
                },
            }
        }
    }
}

pub(crate) fn edit_deepl_links(mut draft: Signal<ContentRead>) -> Element {
    let ContentPayload::DeeplLinks { source_language, target_languages } = draft().payload
    else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "content-edit content-edit--deepl-links",
            input {
                placeholder: "Source language",
                value: "{source_language}",
                oninput: move |e| {
                    if let ContentPayload::DeeplLinks { source_language, .. } =
                        &mut draft.write().payload
                    {
                        *source_language = e.value();
                    }
                },
            }
            input {
                placeholder: "Target languages (comma-separated)",
                value: target_languages.join(", "),
                oninput: move |e| {
                    if let ContentPayload::DeeplLinks { target_languages, .. } =
                        &mut draft.write().payload
                    {
                        *target_languages = e
                            .value()
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect();
                    }
                },
            }
        }
    }
}

// --- search forms -----------------------------------------------------------

fn query_input(mut query: Signal<String>, placeholder: &'static str) -> Element {
    rsx! {
        input {
            class: "content-search-query",
            placeholder: placeholder,
            value: "{query}",
            oninput: move |e| query.set(e.value()),
        }
    }
}

pub(crate) fn search_text(query: Signal<String>) -> Element {
    query_input(query, "Search text…")
}

pub(crate) fn search_annotations(query: Signal<String>) -> Element {
    query_input(query, "Search annotations (token or value)…")
}

pub(crate) fn search_captions(query: Signal<String>) -> Element {
    query_input(query, "Search captions…")
}

pub(crate) fn search_endpoints(query: Signal<String>) -> Element {
    query_input(query, "Search endpoints…")
}

// --- default payload templates ----------------------------------------------

pub(crate) fn default_plain_text() -> ContentPayload {
    ContentPayload::PlainText {
        text: String::new(),
    }
}

pub(crate) fn default_rich_text() -> ContentPayload {
    ContentPayload::RichText {
        html: String::new(),
    }
}

pub(crate) fn default_text_annotation() -> ContentPayload {
    ContentPayload::TextAnnotation { tokens: Vec::new() }
}

pub(crate) fn default_audio() -> ContentPayload {
    ContentPayload::Audio { files: Vec::new() }
}

pub(crate) fn default_images() -> ContentPayload {
    ContentPayload::Images { files: Vec::new() }
}

pub(crate) fn default_api_call() -> ContentPayload {
    ContentPayload::ApiCall {
        endpoint: String::new(),
        method: "GET".to_string(),
        query: None,
    }
}

pub(crate) fn default_deepl_links() -> ContentPayload {
    ContentPayload::DeeplLinks {
        source_language: String::new(),
        target_languages: Vec::new(),
    }
}
