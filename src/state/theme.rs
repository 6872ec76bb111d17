//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! The theme is a closed two-state enum; storage strings are parsed at the
//! boundary so an unknown persisted value degrades to the light default.
//! `ThemeManager` owns the preference and writes through a `PreferenceStore`
//! so persistence can be exercised without a browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_STORAGE_KEY;

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value; absent or unknown means light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to `localStorage` and the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on every theme toggle button.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Owner of the current theme and its persisted copy.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Restore the persisted theme, defaulting to light.
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self { store, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Make `theme` current and persist it.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply_theme(next);
        next
    }
}
