//! Utility helpers shared across page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, observers, storage,
//! scrolling) from component logic. Each keeps a native fallback so the
//! crate builds and tests without a browser.

pub mod animate;
pub mod observe;
pub mod page;
pub mod perf;
pub mod scroll_lock;
pub mod service_worker;
pub mod theme;
pub mod timing;
pub mod viewport;
