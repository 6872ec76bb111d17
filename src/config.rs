//! Site-wide timing, layout, and relay configuration.
//!
//! Every literal delay and threshold the controllers use lives here so the
//! behavior can be tuned in one place. Relay identifiers are resolved at
//! compile time because the WASM bundle has no runtime environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Named animation durations in milliseconds.
pub const ANIMATION_FAST_MS: u32 = 150;
pub const ANIMATION_NORMAL_MS: u32 = 300;
pub const ANIMATION_SLOW_MS: u32 = 500;

/// Scroll handlers run at most once per frame (~60fps).
pub const THROTTLE_DELAY_MS: u32 = 16;
pub const DEBOUNCE_DELAY_MS: u32 = 300;

/// Inclusive upper bounds for the mobile and tablet layouts.
pub const BREAKPOINT_MOBILE_PX: f64 = 640.0;
pub const BREAKPOINT_TABLET_PX: f64 = 968.0;

/// Scroll reveal observer settings.
pub const REVEAL_ROOT_MARGIN: &str = "-10% 0px -10% 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_OFFSET_PX: f64 = 50.0;
pub const REVEAL_TRANSITION: &str = "all 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Navigation geometry.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const NAV_HEADER_OFFSET_PX: f64 = 80.0;
pub const NAV_SECTION_LEAD_PX: f64 = 100.0;

/// Loading screen timings.
pub const LOADING_TICK_MS: u32 = 100;
pub const LOADING_MAX_STEP: f64 = 15.0;
pub const LOADING_LOAD_GRACE_MS: u32 = 500;
pub const LOADING_CEILING_MS: u32 = 3000;
pub const LOADING_EXIT_MS: u32 = 500;

/// Portfolio filter transition timings.
pub const FILTER_FADE_IN_DELAY_MS: u32 = 10;
pub const FILTER_HIDE_DELAY_MS: u32 = ANIMATION_NORMAL_MS;
pub const FILTER_HIDDEN_OFFSET_PX: f64 = 20.0;

/// Contact form feedback timings.
pub const FORM_SUCCESS_DISPLAY_MS: u32 = 3000;
pub const FORM_ERROR_DISPLAY_MS: u32 = 5000;

/// Persisted theme key in `localStorage`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Service worker script registered on load.
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

pub const DEFAULT_SERVICE_ID: &str = "service_ohlluu";
pub const DEFAULT_TEMPLATE_ID: &str = "template_ohlluu";
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";
pub const DEFAULT_CONTACT_EMAIL: &str = "ohlluumarketing@gmail.com";

/// Email relay identifiers and the inbox messages are delivered to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub contact_email: String,
}

impl RelayConfig {
    /// Build relay config from compile-time environment.
    ///
    /// Optional:
    /// - `FOLIO_EMAILJS_SERVICE_ID`: default `service_ohlluu`
    /// - `FOLIO_EMAILJS_TEMPLATE_ID`: default `template_ohlluu`
    /// - `FOLIO_EMAILJS_PUBLIC_KEY`: default placeholder
    /// - `FOLIO_CONTACT_EMAIL`: default site owner inbox
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOLIO_EMAILJS_SERVICE_ID"),
            option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
            option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
            option_env!("FOLIO_CONTACT_EMAIL"),
        )
    }

    fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        contact_email: Option<&str>,
    ) -> Self {
        Self {
            service_id: non_empty_or(service_id, DEFAULT_SERVICE_ID),
            template_id: non_empty_or(template_id, DEFAULT_TEMPLATE_ID),
            public_key: non_empty_or(public_key, PLACEHOLDER_PUBLIC_KEY),
            contact_email: non_empty_or(contact_email, DEFAULT_CONTACT_EMAIL),
        }
    }

    /// True while the public key is still the shipped placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.public_key == PLACEHOLDER_PUBLIC_KEY
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

fn non_empty_or(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => default.to_owned(),
    }
}
