//! Expired token reclamation
//!
//! Tokens that were never scanned stay `Pending` in the store forever unless
//! something removes them. The reaper drops records whose validity window
//! closed more than a grace period ago, so a late scan inside the grace period
//! still gets a precise `Expired` answer instead of `NotFound`.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use qp_shared::config::TokenConfig;

use crate::errors::DomainError;
use crate::repositories::TokenStore;

/// Longest grace period honoured (ten years, in seconds)
pub const MAX_GRACE_PERIOD_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Configuration for the expired token reaper
#[derive(Debug, Clone)]
pub struct ReaperConfig {
    /// Whether the background task runs at all
    pub enabled: bool,
    /// How often to run a reclamation cycle (in seconds)
    pub interval_seconds: u64,
    /// Time after expiry before a record may be removed (in seconds)
    pub grace_period_seconds: i64,
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self::from(&TokenConfig::default())
    }
}

impl From<&TokenConfig> for ReaperConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            enabled: config.reaper_enabled,
            interval_seconds: config.reaper_interval_secs,
            grace_period_seconds: config.reaper_grace_secs.clamp(0, MAX_GRACE_PERIOD_SECONDS),
        }
    }
}

/// Periodically removes long-expired records from a token store
pub struct ExpiredTokenReaper<S: TokenStore + 'static> {
    store: Arc<S>,
    config: ReaperConfig,
}

impl<S: TokenStore> ExpiredTokenReaper<S> {
    pub fn new(store: Arc<S>, config: ReaperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single reclamation cycle
    ///
    /// Runs even when the background task is disabled so operators and tests
    /// can trigger it by hand.
    ///
    /// # Returns
    /// * `Ok(ReapResult)` - Summary of the cycle
    /// * `Err(DomainError)` - The store failed
    pub async fn run_once(&self) -> Result<ReapResult, DomainError> {
        let grace = Duration::seconds(
            self.config
                .grace_period_seconds
                .clamp(0, MAX_GRACE_PERIOD_SECONDS),
        );
        let Some(cutoff) = Utc::now().checked_sub_signed(grace) else {
            warn!(grace_seconds = grace.num_seconds(), "Reaper cutoff out of range, skipping cycle");
            let remaining = self.store.len().await?;
            return Ok(ReapResult { removed: 0, remaining });
        };
        let removed = self.store.purge_expired(cutoff).await?;
        let remaining = self.store.len().await?;

        if removed > 0 {
            info!(removed, remaining, cutoff = %cutoff, "Reclaimed expired tokens");
        }

        Ok(ReapResult { removed, remaining })
    }

    /// Start the reaper as a background task
    ///
    /// Does nothing when the reaper is disabled.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Expired token reaper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        tokio::spawn(async move {
            info!(
                "Expired token reaper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_once().await {
                    error!("Token reaper cycle failed: {}", e);
                }
            }
        });
    }
}

/// Result of a reclamation cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReapResult {
    /// Records removed in this cycle
    pub removed: usize,
    /// Records left in the store afterwards
    pub remaining: usize,
}
