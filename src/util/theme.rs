//! Browser-side theme persistence and application.
//!
//! `LocalStore` backs `ThemeManager` with `localStorage`, and
//! `set_document_theme` applies the `data-theme` attribute to `<html>`.
//! Off the browser reads yield nothing and writes are no-ops.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort; a storage failure (private mode,
//! quota) still applies the theme for the current page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{PreferenceStore, Theme};

/// `window.localStorage` as a preference store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("localStorage unavailable; theme not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn set_document_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
