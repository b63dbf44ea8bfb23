//! Light/dark theme resolution and persistence.
//!
//! The effective theme comes from, in order:
//! 1. the stored user preference (`intovah-theme`),
//! 2. the environment's `prefers-color-scheme` signal,
//! 3. a fallback used only when neither capability exists at all.
//!
//! Environment access goes through small capability traits so the same logic
//! runs in the browser and in headless tests.

pub mod appearance;
pub mod context;
pub mod store;
pub mod system;

use std::fmt;

pub use appearance::{DetachedRoot, RootAppearance, THEME_SCRIPT};
pub use context::{ThemeContext, ThemeEnvironment};
pub use store::{KeyValueStorage, MemoryStorage, PreferenceStore, StorageError};
pub use system::{HeadlessSystemPreference, SystemPreference};

/// Storage key for the persisted theme preference.
pub const STORAGE_KEY: &str = "intovah-theme";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the persisted literal. Anything else is not a theme.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored preference wins; otherwise follow the system signal.
pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_prefers_dark(system_prefers_dark))
}

/// Startup resolution against the live capabilities.
///
/// `fallback` only applies when the environment has neither storage nor a
/// system preference signal (e.g. a non-interactive render).
pub fn resolve_initial(
    store: &PreferenceStore,
    system: &dyn SystemPreference,
    fallback: Theme,
) -> Theme {
    if !store.is_available() && system.signal().is_none() {
        return fallback;
    }
    resolve(store.read(), system.currently_prefers_dark())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("system"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("oled"), None);
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_resolve_without_stored_follows_system() {
        assert_eq!(resolve(None, true), Theme::Dark);
        assert_eq!(resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_resolve_stored_wins() {
        assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_resolve_initial_uses_fallback_without_capabilities() {
        let store = PreferenceStore::unavailable();
        let system = HeadlessSystemPreference::unsupported();
        assert_eq!(resolve_initial(&store, &system, Theme::Light), Theme::Light);
        assert_eq!(resolve_initial(&store, &system, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_resolve_initial_defaults_dark_without_media_query() {
        // Storage exists but no system signal: the observer's own default applies.
        let store = PreferenceStore::new(MemoryStorage::new());
        let system = HeadlessSystemPreference::unsupported();
        assert_eq!(resolve_initial(&store, &system, Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_resolve_initial_reads_store() {
        let storage = MemoryStorage::new();
        storage.insert(STORAGE_KEY, "light");
        let store = PreferenceStore::new(storage);
        let system = HeadlessSystemPreference::new(true);
        assert_eq!(resolve_initial(&store, &system, Theme::Dark), Theme::Light);
    }
}
