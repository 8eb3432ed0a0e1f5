//! Infrastructure implementation of the `CfHost` port.
//!
//! `CfCli<R>` routes API calls through `cf curl` via a `CommandRunner` and
//! reads the targeted endpoint from the cf CLI's own config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::{CfHost, CommandRunner};
use crate::domain::Settings;
use crate::infra::command_runner::TokioCommandRunner;

const NO_API_ENDPOINT: &str = "No API endpoint set. Use 'cf login' or 'cf api' to target an endpoint.";

/// Subset of `~/.cf/config.json` this tool reads.
#[derive(Debug, Default, Deserialize)]
struct CfConfigFile {
    #[serde(rename = "Target", default)]
    target: String,
}

/// Adapter that talks to the Cloud Controller through the `cf` binary.
///
/// Generic over `R: CommandRunner` so that tests can inject a fake runner
/// without spawning real processes.
pub struct CfCli<R: CommandRunner> {
    runner: R,
    cf_bin: String,
    config_path: PathBuf,
}

impl<R: CommandRunner> CfCli<R> {
    pub fn new(runner: R, cf_bin: impl Into<String>, config_path: PathBuf) -> Self {
        Self {
            runner,
            cf_bin: cf_bin.into(),
            config_path,
        }
    }
}

impl CfCli<TokioCommandRunner> {
    /// Production adapter built from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &Settings, config_path: PathBuf) -> Self {
        Self::new(
            TokioCommandRunner::new(settings.timeout()),
            settings.cf_bin.clone(),
            config_path,
        )
    }
}

impl<R: CommandRunner> CfHost for CfCli<R> {
    async fn api_endpoint(&self) -> Result<String> {
        let content = match tokio::fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                anyhow::bail!(NO_API_ENDPOINT)
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("cannot read {}", self.config_path.display()));
            }
        };
        let config: CfConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.config_path.display()))?;

        let target = config.target.trim();
        if target.is_empty() {
            anyhow::bail!(NO_API_ENDPOINT);
        }
        Ok(target.to_string())
    }

    async fn curl(&self, path: &str) -> Result<String> {
        let output = self
            .runner
            .run(&self.cf_bin, &["curl", path])
            .await
            .with_context(|| format!("{} curl {path}", self.cf_bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            anyhow::bail!("{} curl {path} failed: {detail}", self.cf_bin);
        }

        String::from_utf8(output.stdout).context("cf curl returned non-UTF-8 output")
    }
}
