//! State file configuration.

use serde::{Deserialize, Serialize};

/// Location of the last-count state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the JSON state file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "./event.json".to_string()
}
