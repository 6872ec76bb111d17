//! Loading screen progress and visibility.
//!
//! Progress is cosmetic and unrelated to real resource loading. Hiding is
//! idempotent: only the first of the load event or the ceiling timer wins.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Showing,
    /// Fading out; page scroll is restored.
    Hidden,
    /// Exit animation finished; element is out of the render tree.
    Removed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingState {
    progress: f64,
    phase: LoadingPhase,
}

impl LoadingState {
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Add `step` percent. Returns `false` once progress has reached 100,
    /// which tells the caller to stop ticking.
    pub fn advance(&mut self, step: f64) -> bool {
        self.progress = (self.progress + step.max(0.0)).min(100.0);
        self.progress < 100.0
    }

    /// Begin hiding. Returns `false` if already hidden.
    pub fn hide(&mut self) -> bool {
        if self.phase != LoadingPhase::Showing {
            return false;
        }
        self.phase = LoadingPhase::Hidden;
        true
    }

    /// Drop the element after the exit animation.
    pub fn remove(&mut self) {
        if self.phase == LoadingPhase::Hidden {
            self.phase = LoadingPhase::Removed;
        }
    }

    /// CSS width for the progress bar.
    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{}%", self.progress)
    }
}
