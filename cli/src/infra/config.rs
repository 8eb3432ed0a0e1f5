//! Environment-backed configuration loading.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::config::{ENV_PREFIX, Settings};

/// Load [`Settings`] from the process's `CF_LIST_APPS_*` environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or fails validation.
pub fn load_settings() -> Result<Settings> {
    settings_from_vars(std::env::vars())
}

/// Build [`Settings`] from an explicit set of `(key, value)` pairs.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or fails validation.
pub fn settings_from_vars<I>(vars: I) -> Result<Settings>
where
    I: IntoIterator<Item = (String, String)>,
{
    let settings: Settings = envy::prefixed(ENV_PREFIX)
        .from_iter(vars)
        .with_context(|| format!("failed to load config from {ENV_PREFIX}* env vars"))?;
    settings.validate()?;
    tracing::debug!(?settings, "configuration loaded");
    Ok(settings)
}

/// Location of the cf CLI config file for the current process.
///
/// # Errors
///
/// Returns an error if neither `CF_HOME` nor a home directory is available.
pub fn cf_config_path() -> Result<PathBuf> {
    cf_config_path_from(std::env::var_os("CF_HOME"))
}

/// Honours `CF_HOME` the same way the cf CLI does: the file lives at
/// `$CF_HOME/.cf/config.json`, falling back to the user's home directory.
///
/// # Errors
///
/// Returns an error if `cf_home` is unset and no home directory is available.
pub fn cf_config_path_from(cf_home: Option<OsString>) -> Result<PathBuf> {
    let base = match cf_home {
        Some(val) if !val.is_empty() => PathBuf::from(val),
        _ => dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?,
    };
    Ok(base.join(".cf").join("config.json"))
}
