//! Light/dark theme store.
//!
//! The current mode is kept in a context signal, persisted to browser local
//! storage, and applied to the document root as a `data-theme` attribute so
//! plain CSS can react to it.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const THEME_STORAGE_KEY: &str = "tekst-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

pub type ThemeSignal = Signal<ThemeState>;

/// Consume the theme signal from context.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Flip between light and dark, persist, and apply to the document.
pub fn toggle_theme(mut theme: ThemeSignal) {
    let mode = theme().mode.toggled();
    theme.set(ThemeState { mode });
    persist_theme(mode);
    apply_theme(mode);
}

/// Read the persisted theme, defaulting to light.
#[cfg(target_arch = "wasm32")]
pub fn load_theme_from_storage() -> ThemeState {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let mode = match stored.as_deref() {
        Some("dark") => ThemeMode::Dark,
        _ => ThemeMode::Light,
    };
    ThemeState { mode }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme_from_storage() -> ThemeState {
    ThemeState::default()
}

#[cfg(target_arch = "wasm32")]
fn persist_theme(mode: ThemeMode) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_theme(_mode: ThemeMode) {}

/// Set `data-theme` on the document root.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(mode: ThemeMode) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_mode: ThemeMode) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
