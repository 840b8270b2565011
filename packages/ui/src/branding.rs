//! Platform logo with custom-branding probe.
//!
//! Operators can drop a `logo.svg` into the deployment's static directory;
//! the component probes for it once and falls back to the bundled default
//! when it is absent.

use dioxus::prelude::*;

use crate::session::use_api;

const DEFAULT_LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Branding(#[props(default = "".to_string())] class: String) -> Element {
    let client = use_api();

    let custom_logo = use_resource(move || {
        let client = client.clone();
        async move {
            let url = format!("{}/logo.svg", client.paths().static_path);
            client.probe(&url).await.then_some(url)
        }
    });

    let src = match custom_logo() {
        Some(Some(url)) => url,
        _ => DEFAULT_LOGO.to_string(),
    };

    rsx! {
        img {
            class: "branding-logo {class}",
            src: "{src}",
            alt: "Platform logo",
        }
    }
}
