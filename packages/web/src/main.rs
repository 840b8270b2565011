use dioxus::prelude::*;

use ui::{
    apply_theme, load_theme_from_storage, Branding, GlobalLoading, LocaleState, LogoutButton,
    MessageProvider, PlatformProvider, SessionProvider, Toasts,
};
use views::{Browse, Login, Search, Settings, UserProfile, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/browse")]
    Browse {},
    #[route("/search")]
    Search {},
    #[route("/users")]
    Users {},
    #[route("/user/:username")]
    UserProfile { username: String },
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // process-lifetime stores, constructed once here
    let theme = use_signal(load_theme_from_storage);
    use_context_provider(|| theme);
    let locale = use_signal(LocaleState::default);
    use_context_provider(|| locale);
    let loading = use_signal(GlobalLoading::default);
    use_context_provider(|| loading);

    use_effect(move || apply_theme(theme().mode));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        MessageProvider {
            SessionProvider {
                PlatformProvider {
                    Toasts {}
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Common chrome around all pages.
#[component]
fn Shell() -> Element {
    let session = ui::use_session();
    let loading = ui::use_loading();
    let platform = ui::use_platform();

    let title = platform()
        .data()
        .map(|d| d.title.clone())
        .unwrap_or_else(|| "Tekst".to_string());

    rsx! {
        header {
            class: "app-header",
            Branding { class: "app-logo" }
            span { class: "app-title", "{title}" }
            nav {
                class: "app-nav",
                Link { to: Route::Browse {}, "Browse" }
                Link { to: Route::Search {}, "Search" }
                if session().is_superuser() {
                    Link { to: Route::Users {}, "Users" }
                }
                Link { to: Route::Settings {}, "Settings" }
                if session().is_logged_in() {
                    LogoutButton { class: "app-logout" }
                } else {
                    Link { to: Route::Login {}, "Log in" }
                }
            }
            if loading().active {
                span { class: "app-loading", "\u{22EF}" }
            }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to `/browse`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Browse {});
    rsx! {}
}
