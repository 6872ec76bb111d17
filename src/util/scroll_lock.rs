//! Document-level page scroll lock.
//!
//! The body `overflow` style is the one shared resource several controllers
//! need (mobile menu, modal, loading screen). This is the only writer.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// `overflow` value for the body in each lock state.
#[must_use]
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "visible" }
}

pub fn set_page_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property("overflow", overflow_value(locked));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
