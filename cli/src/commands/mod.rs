//! Command implementations

pub mod list_apps;
pub mod version;
