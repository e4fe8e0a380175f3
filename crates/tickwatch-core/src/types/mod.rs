//! Domain types shared across the TickWatch workspace.

pub mod event;
pub mod snapshot;
pub mod tier;

pub use event::{EventAvailability, EventInfo};
pub use snapshot::AttendeeSnapshot;
pub use tier::PriceTier;
