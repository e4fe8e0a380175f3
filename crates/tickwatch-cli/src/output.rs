//! Terminal output for CLI commands.

use std::path::Path;

use serde::Serialize;
use tabled::{Table, Tabled};

use tickwatch_core::types::AttendeeSnapshot;
use tickwatch_worker::RunOutcome;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows as a table, or `empty` when there are none
pub fn print_table<T: Tabled>(rows: &[T], empty: &str) {
    if rows.is_empty() {
        println!("{}", empty);
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    match serde_json::to_string_pretty(item) {
        Ok(json) => println!("{}", json),
        Err(e) => print_error(&format!("Failed to encode output: {}", e)),
    }
}

/// Print what a check run did
pub fn print_outcome(outcome: &RunOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&outcome_json(outcome)),
        OutputFormat::Table => match outcome {
            RunOutcome::Suppressed { .. } | RunOutcome::Skipped => {
                print_warning(&outcome.to_string())
            }
            _ => print_success(&outcome.to_string()),
        },
    }
}

/// Print a stored measurement
pub fn print_snapshot(path: &Path, snapshot: &AttendeeSnapshot, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(snapshot),
        OutputFormat::Table => {
            print_kv("File", &path.display().to_string());
            print_kv("Measured at", &snapshot.timestamp());
            if snapshot.is_known() {
                print_kv("Count", &snapshot.count.to_string());
            } else {
                print_kv("Count", "unknown (next check records a baseline)");
            }
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<14} {}", format!("{}:", key), value);
}

fn outcome_json(outcome: &RunOutcome) -> serde_json::Value {
    let name = match outcome {
        RunOutcome::Initialized { .. } => "initialized",
        RunOutcome::Unchanged { .. } => "unchanged",
        RunOutcome::Notified { .. } => "notified",
        RunOutcome::Suppressed { .. } => "suppressed",
        RunOutcome::Skipped => "skipped",
    };

    match outcome {
        RunOutcome::Initialized { current } | RunOutcome::Unchanged { current } => {
            serde_json::json!({ "outcome": name, "current": current })
        }
        RunOutcome::Notified { previous, current } | RunOutcome::Suppressed { previous, current } => {
            serde_json::json!({ "outcome": name, "previous": previous, "current": current })
        }
        RunOutcome::Skipped => serde_json::json!({ "outcome": name }),
    }
}
