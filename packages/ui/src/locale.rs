//! Locale store and translation catalogs.
//!
//! Catalogs are bundled JSON files keyed by locale; switching the locale
//! loads the catalog and reports the resolved [`LocaleProfile`] back to the
//! caller.

use std::collections::HashMap;

use dioxus::prelude::*;

/// Locales the client ships catalogs for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::DeDe];

    pub fn key(self) -> &'static str {
        match self {
            Locale::EnUs => "enUS",
            Locale::DeDe => "deDE",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::EnUs => "English (US)",
            Locale::DeDe => "Deutsch",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == key)
    }

    fn catalog_source(self) -> &'static str {
        match self {
            Locale::EnUs => include_str!("../locales/enUS.json"),
            Locale::DeDe => include_str!("../locales/deDE.json"),
        }
    }
}

/// A locale together with its loaded translation catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleProfile {
    pub locale: Locale,
    pub display_name: String,
    translations: HashMap<String, String>,
}

impl LocaleProfile {
    /// Load the bundled catalog for a locale. A broken catalog degrades to
    /// key-echoing rather than failing the app.
    pub fn load(locale: Locale) -> Self {
        let translations = serde_json::from_str(locale.catalog_source()).unwrap_or_else(|e| {
            tracing::error!("broken translation catalog for {}: {e}", locale.key());
            HashMap::new()
        });
        Self {
            locale,
            display_name: locale.display_name().to_string(),
            translations,
        }
    }

    /// Translate a message key; unknown keys echo the key itself.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocaleState {
    pub profile: LocaleProfile,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self {
            profile: LocaleProfile::load(Locale::default()),
        }
    }
}

/// Consume the locale signal from context.
pub fn use_locale() -> Signal<LocaleState> {
    use_context::<Signal<LocaleState>>()
}

/// Switch the active locale and return the resolved profile.
pub async fn set_locale(mut state: Signal<LocaleState>, locale: Locale) -> LocaleProfile {
    let profile = LocaleProfile::load(locale);
    state.set(LocaleState {
        profile: profile.clone(),
    });
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_load_for_all_locales() {
        for locale in Locale::ALL {
            let profile = LocaleProfile::load(locale);
            assert_eq!(profile.locale, locale);
            // every catalog carries the core account keys
            assert_ne!(profile.translate("account.login"), "account.login");
        }
    }

    #[test]
    fn test_unknown_key_echoes() {
        let profile = LocaleProfile::load(Locale::EnUs);
        assert_eq!(profile.translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_locale_key_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_key(locale.key()), Some(locale));
        }
        assert_eq!(Locale::from_key("xx"), None);
    }
}
