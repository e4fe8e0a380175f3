//! Single-flight guard for scheduled ticks.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lets at most one holder in at a time; everyone else is turned away
/// instead of waiting.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    lock: Arc<Mutex<()>>,
}

impl SingleFlight {
    /// Create an open guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter if nobody else is inside. The returned permit releases the
    /// guard when dropped.
    pub fn try_enter(&self) -> Option<OwnedMutexGuard<()>> {
        Arc::clone(&self.lock).try_lock_owned().ok()
    }
}
