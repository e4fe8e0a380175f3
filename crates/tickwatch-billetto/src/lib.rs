//! Billetto organiser API (v3) client.
//!
//! Only the two read endpoints TickWatch needs are covered: the event
//! resource and the attendee collection's `total`.

pub mod client;
pub mod models;

pub use client::BillettoClient;
