//! The attendance check: fetch, compare, notify, persist.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use tickwatch_core::config::{AppConfig, DiscordConfig, EventConfig};
use tickwatch_core::error::AppError;
use tickwatch_core::result::AppResult;
use tickwatch_core::traits::{AttendanceSource, Notifier, StateStore};
use tickwatch_core::types::{AttendeeSnapshot, EventInfo};

use super::message::build_message;

/// What a single run of the attendance job did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No earlier measurement existed; the current count was stored.
    Initialized {
        /// The stored measurement.
        current: AttendeeSnapshot,
    },
    /// The count matched the stored one.
    Unchanged {
        /// The stored measurement.
        current: AttendeeSnapshot,
    },
    /// The count changed and a notification was delivered.
    Notified {
        /// Measurement from the previous run.
        previous: AttendeeSnapshot,
        /// Measurement from this run.
        current: AttendeeSnapshot,
    },
    /// The count changed but silent mode kept the notification local.
    Suppressed {
        /// Measurement from the previous run.
        previous: AttendeeSnapshot,
        /// Measurement from this run.
        current: AttendeeSnapshot,
    },
    /// The previous run was still in progress, nothing was done.
    Skipped,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialized { current } => {
                write!(f, "initialized with {} attendees", current.count)
            }
            Self::Unchanged { current } => write!(f, "unchanged at {} attendees", current.count),
            Self::Notified { previous, current } => {
                write!(f, "notified: {} -> {} attendees", previous.count, current.count)
            }
            Self::Suppressed { previous, current } => write!(
                f,
                "changed (silent): {} -> {} attendees",
                previous.count, current.count
            ),
            Self::Skipped => write!(f, "skipped, previous run still in progress"),
        }
    }
}

/// Compares the platform's attendee count with the stored one and
/// notifies when it moved.
#[derive(Debug)]
pub struct AttendanceJob {
    /// Where the current count comes from.
    source: Arc<dyn AttendanceSource>,
    /// Where the last count is kept.
    store: Arc<dyn StateStore>,
    /// Where change notifications go.
    notifier: Arc<dyn Notifier>,
    /// Watched event.
    event_id: u64,
    /// Event presentation and price list.
    event: EventConfig,
    /// Webhook settings.
    discord: DiscordConfig,
}

impl AttendanceJob {
    /// Create a job for the event described by `config`.
    pub fn new(
        config: &AppConfig,
        source: Arc<dyn AttendanceSource>,
        store: Arc<dyn StateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            store,
            notifier,
            event_id: config.billetto.event_id,
            event: config.event.clone(),
            discord: config.discord.clone(),
        }
    }

    /// Run one check.
    ///
    /// A source failure aborts before anything is stored. A missing or
    /// unreadable state file counts as "no earlier measurement". A delivery
    /// failure aborts before the new count is stored, so the next run sees
    /// the same change again.
    pub async fn run_once(&self) -> AppResult<RunOutcome> {
        info!("Checking attendees for event {}", self.event_id);

        let count = self.source.fetch_current_count(self.event_id).await?;
        let count = i64::try_from(count)
            .map_err(|_| AppError::source_unavailable(format!("Attendee count {count} out of range")))?;
        let current = AttendeeSnapshot::now(count);

        let previous = self.load_previous().await;

        let outcome = if !previous.is_known() {
            info!("No earlier measurement, recording {} attendees", current.count);
            RunOutcome::Initialized {
                current: current.clone(),
            }
        } else if previous.count == current.count {
            info!("Attendee count unchanged at {}", current.count);
            RunOutcome::Unchanged {
                current: current.clone(),
            }
        } else {
            self.announce(&previous, &current).await?
        };

        self.store.store_last_count(&current).await?;
        Ok(outcome)
    }

    async fn load_previous(&self) -> AttendeeSnapshot {
        match self.store.load_last_count().await {
            Ok(snapshot) if snapshot.count < AttendeeSnapshot::UNKNOWN_COUNT => {
                warn!(
                    "Stored attendee count {} is invalid, treating as first run",
                    snapshot.count
                );
                AttendeeSnapshot::unknown()
            }
            Ok(snapshot) => snapshot,
            Err(e) if e.is_not_found() => AttendeeSnapshot::unknown(),
            Err(e) => {
                warn!("Failed to read last attendee count, treating as first run: {}", e);
                AttendeeSnapshot::unknown()
            }
        }
    }

    async fn announce(
        &self,
        previous: &AttendeeSnapshot,
        current: &AttendeeSnapshot,
    ) -> AppResult<RunOutcome> {
        info!(
            "Attendee count changed from {} to {}",
            previous.count, current.count
        );

        let event_info = match self.source.fetch_event_info(self.event_id).await {
            Ok(info) => info,
            Err(e) => {
                warn!("Failed to fetch event info, using configured presentation: {}", e);
                EventInfo::default()
            }
        };

        let message = build_message(current, previous, &self.event, &self.discord, &event_info)?;

        let (previous, current) = (previous.clone(), current.clone());
        if self.discord.silent {
            info!(
                "Silent mode, not sending: {}",
                message
                    .embeds
                    .first()
                    .map(|e| e.description.as_str())
                    .unwrap_or_default()
            );
            return Ok(RunOutcome::Suppressed { previous, current });
        }

        self.notifier
            .send_message(&self.discord.webhook_url, &message)
            .await?;
        info!("Notification delivered");
        Ok(RunOutcome::Notified { previous, current })
    }
}
