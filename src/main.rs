//! TickWatch daemon: watches an event's attendee count on a cron schedule
//! and posts a Discord notification whenever it changes.
//!
//! Main entry point that wires all crates together and starts the scheduler.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tickwatch_billetto::BillettoClient;
use tickwatch_core::config::AppConfig;
use tickwatch_core::error::AppError;
use tickwatch_discord::DiscordWebhook;
use tickwatch_state::JsonFileStateStore;
use tickwatch_worker::{AttendanceJob, CronScheduler, TickRunner};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("TickWatch error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment.
///
/// `TICKWATCH_CONFIG` names an extra config file (e.g. a legacy
/// `config.yaml`); `TICKWATCH_ENV` selects the `config/{env}` overlay.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path = std::env::var("TICKWATCH_CONFIG").ok().map(PathBuf::from);
    let env = std::env::var("TICKWATCH_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(config_path.as_deref(), &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main daemon run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TickWatch v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Watching event {} (state: {}, silent: {})",
        config.billetto.event_id,
        config.state.path,
        config.discord.silent
    );

    // ── Step 1: Collaborators ────────────────────────────────────
    let source = Arc::new(BillettoClient::new(&config.billetto)?);
    let store = Arc::new(JsonFileStateStore::new(&config.state.path));
    let notifier = Arc::new(DiscordWebhook::new(config.discord.timeout_seconds)?);

    // ── Step 2: Job + tick runner ────────────────────────────────
    let job = Arc::new(AttendanceJob::new(&config, source, store, notifier));
    let runner = Arc::new(TickRunner::new(job, config.schedule.skip_overlapping));

    // ── Step 3: Scheduler ────────────────────────────────────────
    let mut scheduler = CronScheduler::new().await?;
    scheduler
        .register_attendance_check(Arc::clone(&runner), &config.schedule)
        .await?;
    scheduler.start().await?;

    if config.schedule.run_on_start {
        tracing::info!("Running initial attendance check");
        runner.tick().await;
    }

    // ── Step 4: Graceful shutdown ────────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received, stopping scheduler...");
    scheduler.shutdown().await?;

    tracing::info!("TickWatch stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
