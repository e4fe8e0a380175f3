//! Stored attendee count commands.

use clap::{Args, Subcommand};

use super::Cli;
use crate::output;
use tickwatch_core::error::AppError;
use tickwatch_core::traits::StateStore;
use tickwatch_core::types::AttendeeSnapshot;
use tickwatch_state::JsonFileStateStore;

/// Arguments for state commands
#[derive(Debug, Args)]
pub struct StateArgs {
    /// State subcommand
    #[command(subcommand)]
    pub command: StateCommand,
}

/// State subcommands
#[derive(Debug, Subcommand)]
pub enum StateCommand {
    /// Show the last stored measurement
    Show,
    /// Forget the last measurement; the next check only records a baseline
    Reset,
}

/// Execute state commands
pub async fn execute(args: &StateArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let store = JsonFileStateStore::new(&config.state.path);

    match &args.command {
        StateCommand::Show => match store.load_last_count().await {
            Ok(snapshot) => output::print_snapshot(store.path(), &snapshot, cli.format),
            Err(e) if e.is_not_found() => {
                output::print_warning(&format!(
                    "No state stored yet at '{}'",
                    store.path().display()
                ));
            }
            Err(e) => return Err(e),
        },
        StateCommand::Reset => {
            let snapshot = AttendeeSnapshot::unknown();
            store.store_last_count(&snapshot).await?;
            output::print_success(&format!("State reset at '{}'", store.path().display()));
        }
    }

    Ok(())
}
