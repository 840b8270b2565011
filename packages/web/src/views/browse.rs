//! Browse view: one location of one text, with all resource contents at that
//! location rendered through the registry. Superusers can switch into edit
//! mode and modify contents in place.

use api::ContentRead;
use dioxus::prelude::*;
use ui::registry;
use ui::{
    finish_loading, push_message, start_loading, use_api, use_loading, use_locale, use_messages,
    use_platform, use_session, MessageKind,
};

#[component]
pub fn Browse() -> Element {
    let client = use_api();
    let platform = use_platform();
    let session = use_session();
    let loading = use_loading();
    let locale = use_locale();

    let mut selected_text = use_signal(|| None::<String>);
    let mut position = use_signal(|| 0usize);
    let mut edit_mode = use_signal(|| false);

    let mut location = use_resource(move || {
        let client = client.clone();
        async move {
            let text_id = match selected_text() {
                Some(id) => Some(id),
                None => platform()
                    .data()
                    .and_then(|d| d.default_text().map(|t| t.id.clone())),
            };
            let text_id = text_id?;
            start_loading(loading);
            let outcome = client.location_data(&text_id, position()).await;
            finish_loading(loading);
            match outcome {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::error!("failed to load location data: {e}");
                    None
                }
            }
        }
    });

    let texts = platform()
        .data()
        .map(|d| d.texts.clone())
        .unwrap_or_default();
    let profile = locale().profile;
    let location_label = profile.translate("browse.location").to_string();
    let no_contents = profile.translate("browse.noContents").to_string();
    let loading_label = profile.translate("general.loading").to_string();

    rsx! {
        div {
            class: "browse-view",

            div {
                class: "browse-controls",
                select {
                    class: "browse-text-select",
                    onchange: move |e| selected_text.set(Some(e.value())),
                    for text in texts {
                        option {
                            key: "{text.id}",
                            value: "{text.id}",
                            selected: selected_text().as_deref() == Some(text.id.as_str()),
                            "{text.title}"
                        }
                    }
                }
                label { "{location_label}" }
                button {
                    disabled: position() == 0,
                    onclick: move |_| {
                        let pos = position();
                        position.set(pos.saturating_sub(1));
                    },
                    "\u{2190}"
                }
                span { class: "browse-position", "{position}" }
                button {
                    onclick: move |_| {
                        let pos = position();
                        position.set(pos + 1);
                    },
                    "\u{2192}"
                }
                if session().is_superuser() {
                    label {
                        class: "browse-edit-toggle",
                        input {
                            r#type: "checkbox",
                            checked: edit_mode(),
                            onchange: move |e| edit_mode.set(e.checked()),
                        }
                        "Edit"
                    }
                }
            }

            match location() {
                Some(Some(data)) => rsx! {
                    if let Some(label) = &data.location_label {
                        h2 { class: "browse-location-label", "{label}" }
                    }
                    if data.contents.is_empty() {
                        p { class: "browse-empty", "{no_contents}" }
                    }
                    for content in data.contents.iter() {
                        div {
                            key: "{content.id}",
                            class: "browse-content",
                            if edit_mode() {
                                ContentEditor {
                                    content: content.clone(),
                                    on_saved: move |_| location.restart(),
                                }
                            } else {
                                {registry::render_content(content)}
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    p { class: "browse-error", "Could not load this location." }
                },
                None => rsx! {
                    p { class: "browse-loading", "{loading_label}" }
                },
            }
        }
    }
}

/// Edit one content unit through its kind's form and save it back.
#[component]
fn ContentEditor(content: ContentRead, on_saved: EventHandler<ContentRead>) -> Element {
    let client = use_api();
    let mut messages = use_messages();
    let draft = use_signal(|| content.clone());
    let kind = content.kind();
    let caps = registry::capabilities(kind);

    let save = move |_| {
        let client = client.clone();
        async move {
            match client.update_content(&draft()).await {
                Ok(updated) => {
                    push_message(&mut messages, MessageKind::Success, "Content saved");
                    on_saved.call(updated);
                }
                Err(e) => {
                    tracing::error!("saving content failed: {e}");
                    push_message(&mut messages, MessageKind::Error, "Could not save content");
                }
            }
        }
    };

    rsx! {
        div {
            class: "content-editor",
            span { class: "content-editor-kind", "{caps.label}" }
            {(caps.edit_form)(draft)}
            div {
                class: "content-editor-actions",
                button {
                    class: "content-editor-clear",
                    onclick: move |_| {
                        let mut draft = draft;
                        draft.write().payload = registry::default_payload(kind);
                    },
                    "Clear"
                }
                button { class: "content-editor-save", onclick: save, "Save" }
            }
        }
    }
}
