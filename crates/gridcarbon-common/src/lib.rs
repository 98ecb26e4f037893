//! Gridcarbon Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, error handling, and logging for the gridcarbon workspace.
//!
//! # Overview
//!
//! This crate provides the functionality used across all gridcarbon members:
//!
//! - **Error Handling**: Custom error types and result aliases
//! - **Types**: The daily fuel-mix record and related domain types
//! - **Logging**: Centralized tracing configuration
//!
//! # Example
//!
//! ```no_run
//! use gridcarbon_common::logging::{init_logging, LogConfig};
//! use tracing::info;
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::default())?;
//!     info!("Application started");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{CarbonError, InvalidRangeError, Result};
pub use types::DailyRecord;
