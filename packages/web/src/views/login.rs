//! Login page.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // already logged in: nothing to do here
    if !session().loading && session().is_logged_in() {
        nav.replace(Route::Browse {});
    }

    rsx! {
        div {
            class: "login-view",
            h1 { "Log in" }
            LoginForm {
                on_success: move |_| {
                    nav.replace(Route::Browse {});
                },
            }
        }
    }
}
