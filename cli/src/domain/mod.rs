//! Domain layer — pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod config;
pub mod error;

pub use app::{APPS_PATH, AppRecord, AppState, FilterMode, Page, filter_apps};
pub use config::Settings;
pub use error::{ConfigError, ListError};
