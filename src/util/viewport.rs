//! Viewport geometry helpers: breakpoints, visibility, smooth scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pure functions take plain numbers so layout decisions are testable
//! natively; the `csr` wrappers read the live window and element geometry.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::{BREAKPOINT_MOBILE_PX, BREAKPOINT_TABLET_PX};

/// Responsive layout bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Map a viewport width to its breakpoint. Upper bounds are inclusive.
#[must_use]
pub fn breakpoint_for_width(width: f64) -> Breakpoint {
    if width <= BREAKPOINT_MOBILE_PX {
        Breakpoint::Mobile
    } else if width <= BREAKPOINT_TABLET_PX {
        Breakpoint::Tablet
    } else {
        Breakpoint::Desktop
    }
}

/// True iff every edge of `rect` lies inside a `width` x `height` viewport.
#[must_use]
pub fn rect_in_viewport(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}

/// Document offset to scroll to so `element_top` lands `offset` below the top.
#[must_use]
pub fn scroll_target(element_top: f64, offset: f64) -> f64 {
    element_top - offset
}

/// Breakpoint for the current window width. Desktop off the browser.
pub fn current_breakpoint() -> Breakpoint {
    #[cfg(feature = "csr")]
    {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY);
        breakpoint_for_width(width)
    }
    #[cfg(not(feature = "csr"))]
    {
        Breakpoint::Desktop
    }
}

/// Current vertical scroll position of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Whether `element` is fully visible in the window.
#[cfg(feature = "csr")]
pub fn is_in_viewport(element: &web_sys::Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let r = element.get_bounding_client_rect();
    rect_in_viewport(
        Rect { top: r.top(), left: r.left(), bottom: r.bottom(), right: r.right() },
        width,
        height,
    )
}

/// Smooth-scroll the window so `element` sits `offset` px below the top.
#[cfg(feature = "csr")]
pub fn scroll_to(element: &web_sys::HtmlElement, offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(element.offset_top()), offset));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
