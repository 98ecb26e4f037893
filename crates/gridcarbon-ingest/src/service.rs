//! Periodic update service
//!
//! Owns the recurring-update timer as an explicit object with a
//! stopped/running lifecycle, constructed and held by the process entry
//! point. `start` and `stop` are idempotent; at most one timer task exists.

use std::path::PathBuf;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::config::IngestConfig;
use crate::pipeline::CarbonPipeline;
use crate::store::HistoryStore;

/// Recurring fuel-mix updater
pub struct UpdateService {
    config: IngestConfig,
    history_path: PathBuf,
    handle: Option<JoinHandle<()>>,
}

impl UpdateService {
    pub fn new(config: IngestConfig, history_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            history_path: history_path.into(),
            handle: None,
        }
    }

    /// Whether an update timer is currently active
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start the timer task: one update immediately, then one per interval.
    ///
    /// Calling `start` while running is a no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            warn!("Update service is already running");
            return;
        }

        let config = self.config.clone();
        let store = HistoryStore::new(self.history_path.clone());
        let interval_secs = config.update_interval_secs;

        let handle = tokio::spawn(async move {
            let pipeline = match CarbonPipeline::new(config) {
                Ok(pipeline) => pipeline,
                Err(e) => {
                    error!(error = %e, "Failed to build pipeline, update service exiting");
                    return;
                },
            };

            let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                run_cycle(&pipeline, &store).await;
            }
        });

        self.handle = Some(handle);
        info!(interval_secs, "Update service started");
    }

    /// Stop the timer task. Calling `stop` while stopped is a no-op.
    pub fn stop(&mut self) {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                info!("Update service stopped");
            },
            None => {
                info!("Update service is not running");
            },
        }
    }
}

impl Drop for UpdateService {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// One scheduled update: run the pipeline over the default range and merge
/// the result into the history. Cycle failures are logged, never fatal.
async fn run_cycle(pipeline: &CarbonPipeline, store: &HistoryStore) {
    match pipeline.run(None, None).await {
        Ok(records) => {
            if let Err(e) = store.update(records) {
                error!(error = %e, "Failed to persist update");
            }
        },
        Err(e) => {
            error!(error = %e, "Scheduled update failed");
        },
    }
}
