//! Response bodies of the Billetto organiser API.

use serde::Deserialize;

/// A paginated list envelope. With `limit=0` only `total` is meaningful.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope {
    /// Object type, `"list"`.
    #[serde(default)]
    pub object: String,
    /// Total number of items across all pages.
    pub total: u64,
    /// Whether more pages follow.
    #[serde(default)]
    pub has_more: bool,
}
