//! Administrative user search.

use api::UserSearchFilters;
use dioxus::prelude::*;
use ui::{use_locale, use_user_search};

use crate::Route;

#[component]
pub fn Users() -> Element {
    let locale = use_locale();
    let mut filters = use_signal(|| UserSearchFilters {
        page: 1,
        page_size: 25,
        ..Default::default()
    });
    let results = use_user_search(filters.into());

    let profile = locale().profile;
    let heading = profile.translate("users.search").to_string();
    let query_placeholder = profile.translate("search.placeholder").to_string();
    let loading_label = profile.translate("general.loading").to_string();
    let total_label = profile.translate("users.total").to_string();
    let state = results();

    rsx! {
        div {
            class: "users-view",
            h1 { "{heading}" }

            div {
                class: "users-controls",
                input {
                    class: "users-query",
                    placeholder: "{query_placeholder}",
                    value: "{filters().query}",
                    oninput: move |e| {
                        let mut f = filters.write();
                        f.query = e.value();
                        f.page = 1;
                    },
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: filters().active_only,
                        onchange: move |e| filters.write().active_only = e.checked(),
                    }
                    "Active only"
                }
            }

            if state.loading {
                p { "{loading_label}" }
            } else if state.error {
                p { class: "users-error", "User search failed." }
            } else {
                p { class: "users-total", "{state.total} {total_label}" }
                table {
                    class: "users-table",
                    thead {
                        tr {
                            th { "Username" }
                            th { "Name" }
                            th { "Email" }
                            th { "Flags" }
                        }
                    }
                    tbody {
                        for user in state.users.iter() {
                            tr {
                                key: "{user.id}",
                                td {
                                    Link {
                                        to: Route::UserProfile { username: user.username.clone() },
                                        "{user.username}"
                                    }
                                }
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td {
                                    if user.is_superuser { span { class: "user-flag", "admin " } }
                                    if !user.is_active { span { class: "user-flag", "inactive " } }
                                    if !user.is_verified { span { class: "user-flag", "unverified" } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
