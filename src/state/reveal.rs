//! One-shot visibility triggers for scroll reveal and lazy images.
//!
//! Once triggered, a watcher stops reacting: leaving and re-entering the
//! viewport never re-runs the reveal.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::{REVEAL_OFFSET_PX, REVEAL_TRANSITION};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    #[must_use]
    pub fn has_fired(self) -> bool {
        self.fired
    }

    /// Feed one intersection notification. Returns `true` exactly once, on
    /// the first notification that reports the target intersecting; the
    /// caller then stops observing.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Inline style for a reveal target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_px: f64,
    pub transition: &'static str,
}

impl RevealStyle {
    #[must_use]
    pub fn for_state(revealed: bool) -> Self {
        if revealed {
            Self { opacity: 1.0, offset_px: 0.0, transition: REVEAL_TRANSITION }
        } else {
            Self { opacity: 0.0, offset_px: REVEAL_OFFSET_PX, transition: REVEAL_TRANSITION }
        }
    }

    #[must_use]
    pub fn transform(self) -> String {
        format!("translateY({}px)", self.offset_px)
    }
}
