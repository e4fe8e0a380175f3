//! Job implementations.

pub mod attendance;
pub mod message;

pub use attendance::{AttendanceJob, RunOutcome};
