//! Plain state machines behind each page controller.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. Components hold these values in signals and
//! apply the transitions they return, which keeps every timing and visibility
//! rule testable without a browser.

pub mod contact;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod portfolio;
pub mod reveal;
pub mod theme;
