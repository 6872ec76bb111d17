//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend of its own; `relay` is the only outbound call.

pub mod relay;
