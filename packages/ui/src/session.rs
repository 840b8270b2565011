//! Session/auth store and controls.
//!
//! [`SessionProvider`] owns the process-wide [`ApiClient`], the session
//! state, and the user-lookup cache, and injects all three via context.
//! It also listens for the client's session-expiry events (401 anywhere but
//! the logout endpoint) and forces a logout when one arrives.

use api::{ApiClient, PathResolution, UserRead};
use dioxus::prelude::*;
use futures::StreamExt;

use crate::messages::{push_message, use_messages, MessageKind};
use crate::users::UserLookup;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserRead>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_superuser(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_superuser)
    }
}

/// Get the current session state.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Get the shared (bounded) user-lookup cache.
pub fn use_user_lookup() -> UserLookup {
    use_context::<UserLookup>()
}

/// Provider component managing the session and the API client.
/// Must sit inside [`crate::MessageProvider`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);
    let mut messages = use_messages();

    let client = use_hook(|| {
        let mut client = ApiClient::new(PathResolution::current());
        let mut expiry_events = client.session_expired_events();
        spawn(async move {
            while expiry_events.next().await.is_some() {
                // only an active session can expire; later 401s are no-ops
                if session().user.is_some() {
                    session.set(SessionState {
                        user: None,
                        loading: false,
                    });
                    push_message(
                        &mut messages,
                        MessageKind::Error,
                        "Your session has expired, please log in again",
                    );
                }
            }
        });
        client
    });

    use_context_provider(|| client.clone());
    use_context_provider(|| UserLookup::new(client.clone()));
    use_context_provider(|| session);

    // Restore the session (if the cookie is still valid) on mount
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.me().await {
                Ok(user) => session.set(SessionState {
                    user: Some(user),
                    loading: false,
                }),
                Err(_) => session.set(SessionState {
                    user: None,
                    loading: false,
                }),
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Username/password login form (cookie flow).
#[component]
pub fn LoginForm(#[props(default)] on_success: EventHandler<()>) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut messages = use_messages();
    let locale = crate::use_locale();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let profile = locale().profile;
    let username_placeholder = profile.translate("account.username").to_string();
    let password_placeholder = profile.translate("account.password").to_string();
    let login_label = profile.translate("account.login").to_string();
    let submit = move |_| {
        let client = client.clone();
        async move {
            busy.set(true);
            match client.login(&username(), &password()).await {
                Ok(user) => {
                    session.set(SessionState {
                        user: Some(user),
                        loading: false,
                    });
                    busy.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    push_message(
                        &mut messages,
                        MessageKind::Error,
                        "Login failed, please check your credentials",
                    );
                    busy.set(false);
                }
            }
        }
    };

    rsx! {
        div {
            class: "login-form",
            input {
                class: "login-form-username",
                placeholder: "{username_placeholder}",
                value: "{username}",
                oninput: move |e| username.set(e.value()),
            }
            input {
                class: "login-form-password",
                r#type: "password",
                placeholder: "{password_placeholder}",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }
            button {
                class: "login-form-submit",
                disabled: busy(),
                onclick: submit,
                "{login_label}"
            }
        }
    }
}

/// Button to end the current session.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_api();
    let mut session = use_session();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            if let Ok(()) = client.logout().await {
                session.set(SessionState {
                    user: None,
                    loading: false,
                });
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let base = client.paths().base.clone();
                        let _ = window.location().set_href(&format!("{base}/"));
                    }
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
