// Ingest HTTP configuration

use gridcarbon_common::{CarbonError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the fuel-mix ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Operator page serving the daily fuel-mix table
    pub base_url: String,

    /// HTTP timeout per fetch attempt, in seconds
    pub timeout_secs: u64,

    /// Maximum attempts per date before the date is skipped
    pub max_retries: u32,

    /// Base backoff between attempts; attempt N waits N * this
    pub retry_backoff_ms: u64,

    /// Number of dates fetched concurrently per batch
    pub batch_size: usize,

    /// Default start of the range when the caller passes none (dd-mm-yyyy)
    pub default_start_day: String,

    /// Interval between periodic update runs, in seconds
    pub update_interval_secs: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            base_url: "https://www.nsmo.vn/HTDThongSoVH".to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_backoff_ms: 1000,
            batch_size: 5,
            default_start_day: "01-01-2024".to_string(),
            update_interval_secs: 6 * 60 * 60,
        }
    }
}

impl IngestConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// Environment variables:
    /// - `GRIDCARBON_BASE_URL`
    /// - `GRIDCARBON_TIMEOUT_SECS`
    /// - `GRIDCARBON_MAX_RETRIES`
    /// - `GRIDCARBON_BATCH_SIZE`
    /// - `GRIDCARBON_DEFAULT_START_DAY`
    /// - `GRIDCARBON_UPDATE_INTERVAL_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("GRIDCARBON_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(val) = std::env::var("GRIDCARBON_TIMEOUT_SECS") {
            config.timeout_secs = val
                .parse()
                .map_err(|_| CarbonError::Config(format!("invalid timeout: {}", val)))?;
        }

        if let Ok(val) = std::env::var("GRIDCARBON_MAX_RETRIES") {
            config.max_retries = val
                .parse()
                .map_err(|_| CarbonError::Config(format!("invalid retry count: {}", val)))?;
        }

        if let Ok(val) = std::env::var("GRIDCARBON_BATCH_SIZE") {
            config.batch_size = val
                .parse()
                .map_err(|_| CarbonError::Config(format!("invalid batch size: {}", val)))?;
        }

        if let Ok(day) = std::env::var("GRIDCARBON_DEFAULT_START_DAY") {
            config.default_start_day = day;
        }

        if let Ok(val) = std::env::var("GRIDCARBON_UPDATE_INTERVAL_SECS") {
            config.update_interval_secs = val
                .parse()
                .map_err(|_| CarbonError::Config(format!("invalid update interval: {}", val)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(CarbonError::Config("base URL cannot be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(CarbonError::Config(
                "timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_retries == 0 {
            return Err(CarbonError::Config(
                "max retries must be at least 1".to_string(),
            ));
        }

        if self.batch_size == 0 {
            return Err(CarbonError::Config(
                "batch size must be greater than 0".to_string(),
            ));
        }

        if self.update_interval_secs == 0 {
            return Err(CarbonError::Config(
                "update interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
