//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod revenue;
pub mod state;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use tickwatch_core::config::AppConfig;
use tickwatch_core::error::AppError;

/// TickWatch: attendee count watcher for Billetto events
#[derive(Debug, Parser)]
#[command(name = "tickwatch", version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file (TOML or YAML), layered over config/default
    #[arg(short, long, env = "TICKWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Environment overlay to load from config/{env}
    #[arg(short, long, env = "TICKWATCH_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one attendance check now
    Check(check::CheckArgs),
    /// Estimate revenue for a number of sold tickets
    Revenue(revenue::RevenueArgs),
    /// Inspect or reset the stored attendee count
    State(state::StateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Check(args) => check::execute(args, self).await,
            Commands::Revenue(args) => revenue::execute(args, self).await,
            Commands::State(args) => state::execute(args, self).await,
            Commands::Config(args) => config::execute(args, self).await,
        }
    }

    /// Load configuration from the selected sources
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        tracing::debug!(env = %self.env, file = ?self.config, "Loading configuration");
        AppConfig::load(self.config.as_deref(), &self.env)
    }
}
