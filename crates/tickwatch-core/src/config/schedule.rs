//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// When and how the attendance check runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Six-field cron expression, seconds first (`sec min hour dom mon dow`).
    #[serde(default = "default_cron", alias = "interval")]
    pub cron: String,
    /// Run one check immediately at startup instead of waiting for the first tick.
    #[serde(default)]
    pub run_on_start: bool,
    /// Skip a tick while the previous one is still running.
    #[serde(default = "default_true")]
    pub skip_overlapping: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            cron: default_cron(),
            run_on_start: false,
            skip_overlapping: true,
        }
    }
}

fn default_cron() -> String {
    "0 */15 * * * *".to_string()
}

fn default_true() -> bool {
    true
}
