//! Gridcarbon Ingest Library
//!
//! Scrapes the grid operator's daily fuel-mix page, derives a CO₂ estimate per
//! day, and hands the collected records to the caller.
//!
//! # Pipeline
//!
//! enumerate days → fetch + parse (batched, bounded concurrency) → estimate →
//! collect. One date failing never aborts a run; only an invalid date range
//! does.
//!
//! # Example
//!
//! ```no_run
//! use gridcarbon_ingest::{config::IngestConfig, pipeline::CarbonPipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = CarbonPipeline::new(IngestConfig::default())?;
//!     let records = pipeline.run(Some("01-01-2024"), Some("07-01-2024")).await?;
//!     println!("{} days collected", records.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dates;
pub mod estimator;
pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod service;
pub mod store;

// Re-export main types
pub use config::IngestConfig;
pub use estimator::EmissionFactorTable;
pub use fetcher::{DayOutcome, PageFetcher, SkipReason};
pub use pipeline::CarbonPipeline;
pub use service::UpdateService;
pub use store::HistoryStore;
