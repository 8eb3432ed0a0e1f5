//! `cf-list-apps list-apps` — list apps on the targeted endpoint.

use anyhow::Result;
use clap::Args;

use crate::application::ports::CfHost;
use crate::application::services::app_lister::{self, ListOptions};
use crate::domain::{FilterMode, Settings};
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the list-apps command.
#[derive(Args, Debug, Default)]
pub struct ListAppsArgs {
    /// Only list started apps
    #[arg(long, conflicts_with = "stopped")]
    pub started: bool,

    /// Only list stopped apps
    #[arg(long)]
    pub stopped: bool,
}

impl ListAppsArgs {
    #[must_use]
    pub fn filter(&self) -> FilterMode {
        FilterMode::from_flags(self.started, self.stopped)
    }
}

/// Run `list-apps`.
///
/// Nothing is printed for any page until every page has been fetched.
///
/// # Errors
///
/// Returns a [`crate::domain::ListError`] if the endpoint lookup, any page
/// fetch, or any page decode fails.
pub async fn run(
    ctx: &OutputContext,
    args: &ListAppsArgs,
    host: &impl CfHost,
    settings: &Settings,
    json: bool,
) -> Result<()> {
    let options = ListOptions {
        filter: args.filter(),
        max_pages: settings.max_pages,
    };
    let reporter = TerminalReporter::new(ctx);
    let listing = app_lister::list_apps(host, options, &reporter).await?;

    if json {
        println!("{}", json::format_listing(&listing)?);
        return Ok(());
    }

    for app in &listing.apps {
        ctx.row(&app.name);
    }
    Ok(())
}
