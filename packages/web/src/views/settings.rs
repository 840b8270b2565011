//! Settings: theme and language.

use dioxus::prelude::*;
use ui::{
    push_message, set_locale, toggle_theme, use_locale, use_messages, use_theme, Locale,
    MessageKind, ThemeMode,
};

#[component]
pub fn Settings() -> Element {
    let theme = use_theme();
    let locale = use_locale();
    let mut messages = use_messages();

    let profile = locale().profile;
    let theme_label = profile.translate("settings.theme").to_string();
    let language_label = profile.translate("settings.language").to_string();

    rsx! {
        div {
            class: "settings-view",
            h1 { "Settings" }

            label {
                class: "settings-theme",
                input {
                    r#type: "checkbox",
                    checked: theme().mode == ThemeMode::Dark,
                    onchange: move |_| toggle_theme(theme),
                }
                "{theme_label}"
            }

            label {
                class: "settings-language",
                "{language_label}"
                select {
                    onchange: move |e| {
                        let next = Locale::from_key(&e.value());
                        async move {
                            let Some(next) = next else {
                                return;
                            };
                            let resolved = set_locale(locale, next).await;
                            push_message(
                                &mut messages,
                                MessageKind::Success,
                                &resolved.display_name,
                            );
                        }
                    },
                    for available in Locale::ALL {
                        option {
                            key: "{available.key()}",
                            value: "{available.key()}",
                            selected: available == locale().profile.locale,
                            "{available.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
