//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the single page and attach browser listeners, reading
//! and writing state through signals, the theme context, and the explicit
//! `ModalController` handle.

pub mod contact_form;
pub mod lazy_image;
pub mod loading_screen;
pub mod navbar;
pub mod portfolio_grid;
pub mod project_modal;
pub mod reveal;
pub mod sections;
pub mod theme_toggle;
