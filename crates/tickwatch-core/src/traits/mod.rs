//! Collaborator traits defined in `tickwatch-core` and implemented by
//! the client and storage crates.

pub mod notifier;
pub mod source;
pub mod state;

pub use notifier::{Embed, EmbedField, EmbedMedia, Notifier, WebhookMessage};
pub use source::AttendanceSource;
pub use state::StateStore;
