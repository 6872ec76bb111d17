//! Static site content compiled into the bundle.

pub mod projects;
pub mod site;
