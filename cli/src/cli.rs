//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::domain::ListError;
use crate::infra::cf_cli::CfCli;
use crate::infra::config::{cf_config_path, load_settings};
use crate::output::{OutputContext, json};

/// List Cloud Foundry apps, optionally filtered by running state
#[derive(Parser, Debug)]
#[command(
    name = "cf-list-apps",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (a non-empty NO_COLOR also disables it)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List apps in the targeted environment
    ListApps(commands::list_apps::ListAppsArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        match command {
            Command::Version => commands::version::run(json),
            Command::ListApps(args) => {
                let settings = load_settings()?;
                let host = CfCli::from_settings(&settings, cf_config_path()?);
                let ctx = OutputContext::new(no_color, quiet || json);
                commands::list_apps::run(&ctx, &args, &host, &settings, json).await
            }
        }
    }
}

/// Render a failed command the way the cf CLI does: `FAILED`, then the
/// message. JSON mode prints an error object instead.
pub fn report_failure(err: &anyhow::Error, json: bool, no_color: bool) {
    let message = format!("{err:#}");
    if json {
        let code = err.downcast_ref::<ListError>().map_or("error", ListError::code);
        match json::format_error(&message, code) {
            Ok(out) => println!("{out}"),
            Err(_) => println!("{message}"),
        }
        return;
    }
    OutputContext::new(no_color, false).failed(&message);
}
