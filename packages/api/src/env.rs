//! Deployment path resolution.
//!
//! The client can be served from any sub-path of a host (e.g. `/app/`). All
//! derived paths come from the document's `<base href>` (or the build-time
//! `WEB_PATH` default when no base element is present):
//!
//! - `base`: the deployment prefix with trailing slashes stripped
//! - `static_path`: `<base>/static`, where custom branding assets live
//! - `api_path`: the build-time `TEKST_API_PATH` override if set, otherwise
//!   `<base>/api`
//!
//! Resolution is pure and happens once at startup; missing configuration
//! falls back to defaults, there are no error states.

/// Build-time default deployment prefix.
const DEFAULT_WEB_PATH: &str = match option_env!("WEB_PATH") {
    Some(path) => path,
    None => "/",
};

/// Resolved deployment paths for the running client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResolution {
    /// Deployment prefix, no trailing slash (`""` for a root deployment).
    pub base: String,
    /// Location of server-hosted static assets (custom logo etc.).
    pub static_path: String,
    /// Prefix for all REST endpoints.
    pub api_path: String,
}

impl PathResolution {
    /// Derive all paths from an optional base href and API override.
    pub fn resolve(base_href: Option<&str>, api_override: Option<&str>) -> Self {
        let base = base_href
            .unwrap_or(DEFAULT_WEB_PATH)
            .trim_end_matches('/')
            .to_string();
        let static_path = format!("{base}/static");
        let api_path = match api_override {
            Some(path) => path.trim_end_matches('/').to_string(),
            None => format!("{base}/api"),
        };
        Self {
            base,
            static_path,
            api_path,
        }
    }

    /// Resolve paths for the current environment.
    ///
    /// On wasm this reads the document's base element; elsewhere (tests,
    /// prerendering) only build-time configuration applies.
    pub fn current() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_document()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::resolve(None, option_env!("TEKST_API_PATH"))
        }
    }

    /// Resolve paths from the document's declared base URI.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document() -> Self {
        let base_href = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.base_uri().ok().flatten())
            .and_then(|uri| web_sys::Url::new(&uri).ok())
            .map(|url| url.pathname());
        Self::resolve(base_href.as_deref(), option_env!("TEKST_API_PATH"))
    }
}

impl Default for PathResolution {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sub_path_deployment() {
        let paths = PathResolution::resolve(Some("/app/"), None);
        assert_eq!(paths.base, "/app");
        assert_eq!(paths.static_path, "/app/static");
        assert_eq!(paths.api_path, "/app/api");
    }

    #[test]
    fn test_resolve_root_deployment() {
        let paths = PathResolution::resolve(Some("/"), None);
        assert_eq!(paths.base, "");
        assert_eq!(paths.static_path, "/static");
        assert_eq!(paths.api_path, "/api");
    }

    #[test]
    fn test_api_override_wins() {
        let paths = PathResolution::resolve(Some("/app/"), Some("https://api.example.org/tekst/"));
        assert_eq!(paths.static_path, "/app/static");
        assert_eq!(paths.api_path, "https://api.example.org/tekst");
    }

    #[test]
    fn test_missing_base_falls_back_to_default() {
        let paths = PathResolution::resolve(None, None);
        assert_eq!(paths.base, DEFAULT_WEB_PATH.trim_end_matches('/'));
    }
}
