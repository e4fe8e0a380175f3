//! JSON file store for the last attendee measurement.

pub mod file;

pub use file::JsonFileStateStore;
