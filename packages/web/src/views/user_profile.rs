//! Public user profile, resolved through the bounded lookup cache.

use dioxus::prelude::*;
use ui::use_public_user;

#[component]
pub fn UserProfile(username: String) -> Element {
    let mut user_key = use_signal(|| username.clone());
    // keep the lookup key in sync when navigating between profiles
    if *user_key.peek() != username {
        user_key.set(username.clone());
    }
    let user = use_public_user(user_key.into());

    match user() {
        None => rsx! {
            p { class: "profile-loading", "Loading…" }
        },
        Some(None) => rsx! {
            p { class: "profile-missing", "No public profile for \"{username}\"." }
        },
        Some(Some(found)) => rsx! {
            div {
                class: "profile-view",
                if let Some(avatar) = &found.avatar_url {
                    img { class: "profile-avatar", src: "{avatar}", alt: "Avatar" }
                }
                h1 { "{found.display_name()}" }
                p { class: "profile-username", "@{found.username}" }
                if let Some(affiliation) = &found.affiliation {
                    p { class: "profile-affiliation", "{affiliation}" }
                }
            }
        },
    }
}
