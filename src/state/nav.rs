//! Navigation bar state: scroll styling, mobile menu, active section.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::{NAV_SCROLLED_THRESHOLD_PX, NAV_SECTION_LEAD_PX};
use crate::util::viewport::Breakpoint;

/// Navbar switches to its compact style past the threshold.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// Last section (document order) whose top, less the lead, is at or above
/// `scroll_y`. `sections` is `(id, offset_top)` in document order.
#[must_use]
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - NAV_SECTION_LEAD_PX)
        .map(|(id, _)| *id)
        .next_back()
}

/// Section id an in-page `href` points at.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[must_use]
pub fn link_is_active(href: &str, active: Option<&str>) -> bool {
    active.is_some_and(|id| anchor_target(href) == Some(id))
}

/// Mobile menu open/closed. Every transition reports the new scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click. Returns whether page scroll should now be locked.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close if open; returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Document click. Closes when the target is outside both the menu and
    /// the hamburger.
    pub fn handle_document_click(&mut self, in_menu: bool, in_hamburger: bool) -> bool {
        if in_menu || in_hamburger {
            return false;
        }
        self.close()
    }

    /// Growing out of the compact layouts closes the menu.
    pub fn handle_breakpoint(&mut self, breakpoint: Breakpoint) -> bool {
        if breakpoint == Breakpoint::Desktop {
            return self.close();
        }
        false
    }
}
