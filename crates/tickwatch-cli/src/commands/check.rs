//! One-off attendance check.

use std::sync::Arc;

use clap::Args;

use super::Cli;
use crate::output;
use tickwatch_billetto::BillettoClient;
use tickwatch_core::error::AppError;
use tickwatch_discord::DiscordWebhook;
use tickwatch_state::JsonFileStateStore;
use tickwatch_worker::AttendanceJob;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Log the notification instead of posting it
    #[arg(long)]
    pub silent: bool,
}

/// Execute the check command
pub async fn execute(args: &CheckArgs, cli: &Cli) -> Result<(), AppError> {
    let mut config = cli.load_config()?;
    if args.silent {
        config.discord.silent = true;
    }

    let source = Arc::new(BillettoClient::new(&config.billetto)?);
    let store = Arc::new(JsonFileStateStore::new(&config.state.path));
    let notifier = Arc::new(DiscordWebhook::new(config.discord.timeout_seconds)?);
    let job = AttendanceJob::new(&config, source, store, notifier);

    let outcome = job.run_once().await?;
    output::print_outcome(&outcome, cli.format);

    Ok(())
}
