//! End-to-end attendance checks against fake Billetto and Discord servers.

mod helpers;
mod workflow_test;
