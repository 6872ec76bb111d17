//! Light/dark toggle button and the shared theme context behind it.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeManager};
use crate::util::theme::{LocalStore, set_document_theme};

/// Current theme plus its persisted owner. Provided once by `App`; every
/// toggle on the page reads the same signal so their icons stay in sync.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    manager: StoredValue<ThemeManager<LocalStore>>,
}

impl ThemeContext {
    /// Restore the persisted theme, apply it to `<html>`, and provide the
    /// context to descendants.
    pub fn provide() -> Self {
        let manager = ThemeManager::load(LocalStore);
        let current = manager.current();
        set_document_theme(current);
        let ctx = Self { theme: RwSignal::new(current), manager: StoredValue::new(manager) };
        provide_context(ctx);
        ctx
    }

    pub fn theme(self) -> Theme {
        self.theme.get()
    }

    /// Make `theme` current: document attribute, storage, and icons.
    pub fn apply_theme(self, theme: Theme) {
        self.manager.update_value(|m| m.apply_theme(theme));
        set_document_theme(theme);
        self.theme.set(theme);
    }

    pub fn toggle(self) {
        self.apply_theme(self.theme.get_untracked().toggled());
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <button class="theme-toggle" type="button" aria-label="Toggle theme" on:click=move |_| ctx.toggle()>
            <span class="toggle-icon">{move || ctx.theme().toggle_icon()}</span>
        </button>
    }
}
