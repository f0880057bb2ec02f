//! Expiry sweep for periodic maintenance of pending verification records
//!
//! Confirmation checks expiry on read, so the sweep only keeps stored
//! statuses in line with reality. It never deletes rows.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use cb_shared::config::VerificationConfig;

use crate::domain::entities::verification_record::DEFAULT_EXPIRATION_MINUTES;
use crate::errors::DomainError;
use crate::repositories::VerificationRepository;

/// Configuration for the expiry sweep
#[derive(Debug, Clone)]
pub struct ExpirySweepConfig {
    /// How often to run the sweep (in seconds)
    pub interval_seconds: u64,
    /// Code lifetime; pending records older than this are expired
    pub code_expiration_minutes: i64,
    /// Whether to run the sweep at all
    pub enabled: bool,
}

impl Default for ExpirySweepConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 600,
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            enabled: false,
        }
    }
}

impl From<&VerificationConfig> for ExpirySweepConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            interval_seconds: config.sweep.interval_seconds,
            code_expiration_minutes: config.code_expiration_minutes,
            enabled: config.sweep.enabled,
        }
    }
}

/// Service marking stale pending records as expired
pub struct ExpirySweepService<R: VerificationRepository + 'static> {
    repository: Arc<R>,
    config: ExpirySweepConfig,
}

impl<R: VerificationRepository> ExpirySweepService<R> {
    /// Create a new sweep service
    pub fn new(repository: Arc<R>, config: ExpirySweepConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(SweepResult)` - Number of records transitioned and the cutoff used
    /// * `Err(DomainError)` - If the bulk update fails
    pub async fn run_sweep(&self) -> Result<SweepResult, DomainError> {
        if !self.config.enabled {
            return Ok(SweepResult::default());
        }

        let cutoff = Utc::now() - Duration::minutes(self.config.code_expiration_minutes);
        let expired_records = self.repository.expire_pending_before(cutoff).await?;

        info!(
            expired_records = expired_records,
            cutoff = %cutoff,
            event = "verification_sweep_completed",
            "Expired {} stale verification records",
            expired_records
        );

        Ok(SweepResult {
            expired_records,
            cutoff: Some(cutoff),
        })
    }

    /// Start the sweep as a background task
    ///
    /// This spawns a tokio task that runs the sweep at regular intervals
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Verification expiry sweep is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        tokio::spawn(async move {
            info!(
                "Verification expiry sweep started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!("Verification expiry sweep failed: {}", e);
                }
            }
        });
    }
}

/// Result of a sweep cycle
#[derive(Debug, Default)]
pub struct SweepResult {
    /// Number of pending records marked expired
    pub expired_records: u64,
    /// Issuance cutoff used; `None` when the sweep is disabled
    pub cutoff: Option<DateTime<Utc>>,
}
