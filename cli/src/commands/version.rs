//! `cf-list-apps version` — print the build version.

use anyhow::Result;

use crate::output::json;

/// Run the version command.
///
/// # Errors
///
/// Returns an error if the JSON object cannot be serialized.
pub fn run(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let out = if json {
        json::format_version(version)?
    } else {
        format!("cf-list-apps {version}")
    };
    println!("{out}");
    Ok(())
}
