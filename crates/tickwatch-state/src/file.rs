//! Single-file JSON state store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use tickwatch_core::error::{AppError, ErrorKind};
use tickwatch_core::result::AppResult;
use tickwatch_core::traits::StateStore;
use tickwatch_core::types::AttendeeSnapshot;

/// Stores one [`AttendeeSnapshot`] as pretty-printed JSON at a fixed path.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the
/// target, so readers see either the old or the new snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    /// Location of the state file.
    path: PathBuf,
}

impl JsonFileStateStore {
    /// Create a store backed by `path`. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory of the state file exists.
    async fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create state directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for JsonFileStateStore {
    async fn load_last_count(&self) -> AppResult<AttendeeSnapshot> {
        let data = fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("No state file at {}", self.path.display()))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read state file: {}", self.path.display()),
                    e,
                )
            }
        })?;

        let snapshot: AttendeeSnapshot = serde_json::from_slice(&data).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Corrupt state file {}: {e}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), count = snapshot.count, "Loaded state");
        Ok(snapshot)
    }

    async fn store_last_count(&self, snapshot: &AttendeeSnapshot) -> AppResult<()> {
        self.ensure_parent().await?;

        let mut data = serde_json::to_vec_pretty(snapshot)?;
        data.push(b'\n');

        let tmp = self.temp_path();
        fs::write(&tmp, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write state file: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace state file: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), count = snapshot.count, "Stored state");
        Ok(())
    }
}
