//! Pipeline orchestration
//!
//! Drives the end-to-end run: enumerate days, fetch and parse them in
//! fixed-size concurrent batches, estimate emissions, collect. Batches run
//! strictly in sequence; the batch size bounds in-flight requests against the
//! operator's site.

use std::future::Future;

use chrono::{Local, NaiveDate};
use futures::future::join_all;
use gridcarbon_common::{DailyRecord, InvalidRangeError, Result};
use tracing::info;

use crate::config::IngestConfig;
use crate::dates::{enumerate_days, format_day};
use crate::estimator::EmissionFactorTable;
use crate::fetcher::{DayOutcome, PageFetcher};

/// Fetch a day sequence in consecutive batches of `batch_size`.
///
/// Within a batch all fetches run concurrently; the next batch starts only
/// once every member has settled. Results come back in input order, so the
/// collected records stay chronological. Skipped days simply contribute
/// nothing.
pub async fn run_batches<F, Fut>(
    days: &[NaiveDate],
    batch_size: usize,
    fetch: F,
) -> Vec<DailyRecord>
where
    F: Fn(NaiveDate) -> Fut,
    Fut: Future<Output = DayOutcome>,
{
    let total = days.len();
    let mut records = Vec::new();
    let mut processed = 0usize;

    for batch in days.chunks(batch_size.max(1)) {
        let outcomes = join_all(batch.iter().map(|day| fetch(*day))).await;

        processed += batch.len();
        records.extend(outcomes.into_iter().filter_map(DayOutcome::into_record));

        info!(processed, total, "Batch complete");
    }

    records
}

/// Fuel-mix ingestion pipeline
pub struct CarbonPipeline {
    config: IngestConfig,
    fetcher: PageFetcher,
    factors: EmissionFactorTable,
}

impl CarbonPipeline {
    /// Create a pipeline with the default emission factor table
    pub fn new(config: IngestConfig) -> Result<Self> {
        Self::with_factors(config, EmissionFactorTable::default())
    }

    /// Create a pipeline with an explicit factor table
    pub fn with_factors(config: IngestConfig, factors: EmissionFactorTable) -> Result<Self> {
        config.validate()?;
        let fetcher = PageFetcher::new(config.clone())?;

        Ok(Self {
            config,
            fetcher,
            factors,
        })
    }

    /// Run the pipeline over an inclusive dd-mm-yyyy range.
    ///
    /// `start` defaults to the configured start day, `end` to today. The only
    /// fatal condition is an invalid range, raised before any network call;
    /// every per-date failure shrinks the result set instead.
    pub async fn run(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> std::result::Result<Vec<DailyRecord>, InvalidRangeError> {
        let start = start.unwrap_or(&self.config.default_start_day);
        let today = format_day(Local::now().date_naive());
        let end = end.unwrap_or(&today);

        let days = enumerate_days(start, end)?;

        info!(
            start,
            end,
            days = days.len(),
            batch_size = self.config.batch_size,
            "Starting fuel-mix update"
        );

        let mut records = run_batches(&days, self.config.batch_size, |day| {
            self.fetcher.fetch_day(day)
        })
        .await;

        for record in &mut records {
            self.factors.apply(record);
        }

        info!(records = records.len(), "Update complete");

        Ok(records)
    }
}
