//! Common types used across gridcarbon

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One calendar day's scraped fuel-mix reading.
///
/// The `day` string (`dd-mm-yyyy`) is the identity key. `sources` maps the
/// power-source labels exactly as scraped from the operator page to their
/// numeric readings; the label set belongs to the page, not to this schema.
///
/// # Examples
///
/// ```rust
/// use gridcarbon_common::types::DailyRecord;
///
/// let mut record = DailyRecord::new("01-01-2024");
/// record.sources.insert("Thủy điện".to_string(), 242.5);
/// assert!(record.co2_estimate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day in dd-mm-yyyy format
    pub day: String,

    /// Power-source label -> raw reading, as scraped
    pub sources: HashMap<String, f64>,

    /// Derived CO₂ estimate, present only after estimation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_estimate: Option<f64>,
}

impl DailyRecord {
    /// Create an empty record for a day, before any sources are parsed
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            sources: HashMap::new(),
            co2_estimate: None,
        }
    }

    /// Whether the parser extracted any usable source readings
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = DailyRecord::new("01-01-2024");
        assert!(record.is_empty());
        assert_eq!(record.day, "01-01-2024");
        assert!(record.co2_estimate.is_none());
    }

    #[test]
    fn test_estimate_omitted_from_json_until_set() {
        let mut record = DailyRecord::new("01-01-2024");
        record.sources.insert("Điện gió".to_string(), 12.0);

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("co2_estimate"));

        record.co2_estimate = Some(3.5);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("co2_estimate"));

        let back: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
