//! Shared UI for the Tekst web client: reactive stores, data hooks, the
//! resource-kind registry, and common components.

mod session;
pub use session::{use_api, use_session, use_user_lookup, LoginForm, LogoutButton, SessionProvider, SessionState};

mod platform;
pub use platform::{use_platform, PlatformLoad, PlatformProvider};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, toggle_theme, use_theme, ThemeMode, ThemeSignal, ThemeState};

mod locale;
pub use locale::{set_locale, use_locale, Locale, LocaleProfile, LocaleState};

mod messages;
pub use messages::{push_message, use_messages, Message, MessageKind, MessageProvider, MessageQueue};

mod loading;
pub use loading::{finish_loading, start_loading, use_loading, GlobalLoading};

mod debounce;
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};

mod quick_search;
pub use quick_search::QuickSearcher;

mod users;
pub use users::{
    use_public_user, use_public_user_search, use_user_search, AdminUserSearcher,
    PublicUserSearcher, UserLookup, UserSearchState,
};

pub mod registry;
mod content;

mod toasts;
pub use toasts::Toasts;

mod branding;
pub use branding::Branding;

mod time;
