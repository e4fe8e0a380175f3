//! Configuration management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::Cli;
use crate::output::{self, OutputFormat};
use tickwatch_core::error::AppError;

/// Annotated sample configuration shipped with the binary.
const EXAMPLE_CONFIG: &str = include_str!("../../../../config/example.toml");

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration with secrets masked
    Show,
    /// Validate the merged configuration
    Validate,
    /// Write an example configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/default.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, cli: &Cli) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = cli.load_config()?.masked();
            output::print_json(&config);
        }
        ConfigCommand::Validate => {
            let config = cli.load_config()?;
            if cli.format == OutputFormat::Json {
                output::print_json(&serde_json::json!({ "valid": true }));
                return Ok(());
            }
            output::print_success("Configuration is valid");
            output::print_kv("Event", &config.billetto.event_id.to_string());
            output::print_kv("Schedule", &config.schedule.cron);
            output::print_kv("State file", &config.state.path);
            output::print_kv("Price tiers", &config.event.price_list.len().to_string());
            if config.discord.webhook_url.is_empty() && !config.discord.silent {
                output::print_warning("No webhook URL set; notifications will fail");
            }
        }
        ConfigCommand::Generate {
            output: out_path,
            force,
        } => {
            if out_path.exists() && !force {
                return Err(AppError::validation(format!(
                    "'{}' already exists, pass --force to overwrite",
                    out_path.display()
                )));
            }

            if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, EXAMPLE_CONFIG).await?;

            output::print_success(&format!("Example config written to '{}'", out_path.display()));
        }
    }

    Ok(())
}
