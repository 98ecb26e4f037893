//! Remote operator-page fetcher with per-date retry
//!
//! Every failure mode below the fatal range validation resolves to a value:
//! a fetch either yields a parsed record or a skip, never an error that could
//! cross the batch boundary.

use std::time::Duration;

use chrono::NaiveDate;
use gridcarbon_common::{CarbonError, DailyRecord, Result};
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::IngestConfig;
use crate::dates::format_day;
use crate::parser::parse_daily_mix;

/// Why a day produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The page fetched fine but parsed to zero source fields
    EmptyPage,
    /// Every attempt failed (network error, timeout, or HTTP status)
    RetriesExhausted,
}

/// Outcome of fetching one calendar day
#[derive(Debug, Clone, PartialEq)]
pub enum DayOutcome {
    Record(DailyRecord),
    Skipped { day: String, reason: SkipReason },
}

impl DayOutcome {
    /// Unwrap into the record, if the day produced one
    pub fn into_record(self) -> Option<DailyRecord> {
        match self {
            DayOutcome::Record(record) => Some(record),
            DayOutcome::Skipped { .. } => None,
        }
    }
}

/// HTTP client for the operator's daily fuel-mix page
pub struct PageFetcher {
    client: Client,
    config: IngestConfig,
}

impl PageFetcher {
    /// Create a new fetcher with the configured timeout
    pub fn new(config: IngestConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("gridcarbon-ingest/0.1")
            .build()
            .map_err(|e| CarbonError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch and parse one day, retrying failed attempts with linear backoff.
    ///
    /// An empty page is not retried: within one run, re-fetching a page the
    /// operator has not populated cannot produce different markup.
    pub async fn fetch_day(&self, day: NaiveDate) -> DayOutcome {
        let day_str = format_day(day);

        for attempt in 1..=self.config.max_retries {
            match self.fetch_page(&day_str).await {
                Ok(html) => {
                    return match parse_daily_mix(&html, &day_str) {
                        Some(record) => {
                            info!(
                                day = %day_str,
                                sources = record.sources.len(),
                                "Fetched fuel mix"
                            );
                            DayOutcome::Record(record)
                        },
                        None => {
                            warn!(day = %day_str, "Empty fuel-mix page, skipping day");
                            DayOutcome::Skipped {
                                day: day_str,
                                reason: SkipReason::EmptyPage,
                            }
                        },
                    };
                },
                Err(e) => {
                    warn!(
                        day = %day_str,
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "Fetch attempt failed"
                    );

                    if attempt < self.config.max_retries {
                        let backoff =
                            Duration::from_millis(self.config.retry_backoff_ms * attempt as u64);
                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }

        error!(day = %day_str, "Exhausted retries, skipping day");
        DayOutcome::Skipped {
            day: day_str,
            reason: SkipReason::RetriesExhausted,
        }
    }

    /// Single GET attempt for one day's page
    async fn fetch_page(&self, day: &str) -> std::result::Result<String, reqwest::Error> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("day", day)])
            .send()
            .await?;

        response.error_for_status()?.text().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record() {
        let record = DailyRecord::new("01-01-2024");
        assert!(DayOutcome::Record(record).into_record().is_some());

        let skipped = DayOutcome::Skipped {
            day: "01-01-2024".to_string(),
            reason: SkipReason::EmptyPage,
        };
        assert!(skipped.into_record().is_none());
    }
}
