//! # tickwatch-core
//!
//! Core crate for TickWatch. Contains the configuration schema, the
//! domain types shared by every crate, the collaborator traits the
//! attendance workflow is built from, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TickWatch crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
