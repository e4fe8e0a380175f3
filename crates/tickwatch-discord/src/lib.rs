//! Discord webhook notifier.
//!
//! The message model lives in `tickwatch_core::traits::notifier`; this
//! crate only knows how to post it.

pub mod webhook;

pub use webhook::DiscordWebhook;
