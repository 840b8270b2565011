//! Platform data provider.
//!
//! Platform configuration/metadata is fetched exactly once at startup and
//! cached in context for the process lifetime. Unlike every other call,
//! the load error is not swallowed into a flag: the provider receives it
//! and renders a hard failure state, since nothing works without platform
//! data.

use api::PlatformData;
use dioxus::prelude::*;

use crate::session::use_api;

#[derive(Clone, Debug, PartialEq)]
pub enum PlatformLoad {
    Loading,
    Ready(PlatformData),
    Failed,
}

impl PlatformLoad {
    pub fn data(&self) -> Option<&PlatformData> {
        match self {
            PlatformLoad::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Consume the platform data signal from context.
pub fn use_platform() -> Signal<PlatformLoad> {
    use_context::<Signal<PlatformLoad>>()
}

/// Fetches platform data once and provides it to the whole app.
#[component]
pub fn PlatformProvider(children: Element) -> Element {
    let client = use_api();
    let mut platform = use_signal(|| PlatformLoad::Loading);
    use_context_provider(|| platform);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.platform_data().await {
                Ok(data) => platform.set(PlatformLoad::Ready(data)),
                Err(e) => {
                    tracing::error!("failed to load platform data: {e}");
                    platform.set(PlatformLoad::Failed);
                }
            }
        }
    });

    match platform() {
        PlatformLoad::Failed => rsx! {
            div {
                class: "platform-error",
                "The platform is currently unreachable. Please try again later."
            }
        },
        _ => rsx! {
            {children}
        },
    }
}
