//! Tick runner: one scheduled invocation of the attendance job.

use std::sync::Arc;
use std::time::Instant;

use tickwatch_core::result::AppResult;

use crate::guard::SingleFlight;
use crate::jobs::{AttendanceJob, RunOutcome};

/// Runs the attendance job for each scheduler tick, optionally refusing to
/// overlap with a tick that is still in progress.
#[derive(Debug)]
pub struct TickRunner {
    /// The job to run.
    job: Arc<AttendanceJob>,
    /// Shared between all ticks.
    guard: SingleFlight,
    /// Whether overlapping ticks are skipped.
    skip_overlapping: bool,
}

impl TickRunner {
    /// Create a runner for `job`.
    pub fn new(job: Arc<AttendanceJob>, skip_overlapping: bool) -> Self {
        Self {
            job,
            guard: SingleFlight::new(),
            skip_overlapping,
        }
    }

    /// The guard shared by all ticks of this runner.
    pub fn guard(&self) -> &SingleFlight {
        &self.guard
    }

    /// Run one tick and return what happened.
    pub async fn run(&self) -> AppResult<RunOutcome> {
        let _permit = if self.skip_overlapping {
            match self.guard.try_enter() {
                Some(permit) => Some(permit),
                None => {
                    tracing::warn!("Previous attendance check still running, skipping tick");
                    return Ok(RunOutcome::Skipped);
                }
            }
        } else {
            None
        };

        self.job.run_once().await
    }

    /// Run one tick and log the result. Errors never escape, so the
    /// scheduler keeps going.
    pub async fn tick(&self) {
        let started = Instant::now();
        match self.run().await {
            Ok(outcome) => tracing::info!(
                "Attendance check finished in {}ms: {}",
                started.elapsed().as_millis(),
                outcome
            ),
            Err(e) => tracing::error!("Attendance check failed: {}", e),
        }
    }
}
