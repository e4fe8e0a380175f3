//! Scheduled attendance checks for TickWatch.
//!
//! This crate provides:
//! - The attendance job that compares the current count with the stored
//!   one and notifies on change
//! - A single-flight guard so overlapping ticks never run concurrently
//! - A cron scheduler that drives the job

pub mod guard;
pub mod jobs;
pub mod runner;
pub mod scheduler;

pub use guard::SingleFlight;
pub use jobs::{AttendanceJob, RunOutcome};
pub use runner::TickRunner;
pub use scheduler::CronScheduler;
