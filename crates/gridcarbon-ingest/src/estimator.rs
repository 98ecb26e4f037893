//! CO₂ emission estimation
//!
//! Applies fixed per-source emission factors to a day's raw readings. The
//! factor table is static configuration; it never changes during a run.

use gridcarbon_common::DailyRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed mapping from power-source label to emission factor (kg CO₂ per unit
/// reading). The default table carries the operator's published factors for
/// the fossil sources; renewables carry no entry and contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionFactorTable {
    factors: HashMap<String, f64>,
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        let factors = HashMap::from([
            ("Nhiệt điện than".to_string(), 1.00),
            ("Tuabin khí (Gas + Dầu DO)".to_string(), 0.55),
            ("Nhiệt điện dầu".to_string(), 0.80),
            ("Khác (Sinh khối, Diesel Nam, …)".to_string(), 0.20),
        ]);
        Self { factors }
    }
}

impl EmissionFactorTable {
    /// Build a table from explicit factors
    pub fn new(factors: HashMap<String, f64>) -> Self {
        Self { factors }
    }

    /// Compute the CO₂ estimate for a record, rounded to 2 decimal places.
    ///
    /// Sources in the record with no factor are ignored; sources in the table
    /// missing from the record read as zero. Pure and idempotent.
    pub fn estimate(&self, record: &DailyRecord) -> f64 {
        let total: f64 = self
            .factors
            .iter()
            .map(|(source, factor)| record.sources.get(source).copied().unwrap_or(0.0) * factor)
            .sum();

        (total * 100.0).round() / 100.0
    }

    /// Compute and attach the estimate to the record
    pub fn apply(&self, record: &mut DailyRecord) {
        record.co2_estimate = Some(self.estimate(record));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn record_with(sources: &[(&str, f64)]) -> DailyRecord {
        let mut record = DailyRecord::new("01-01-2024");
        for (name, value) in sources {
            record.sources.insert(name.to_string(), *value);
        }
        record
    }

    #[test]
    fn test_weighted_sum_ignores_unknown_sources() {
        let table = EmissionFactorTable::new(HashMap::from([
            ("A".to_string(), 1.0),
            ("B".to_string(), 0.5),
        ]));
        let record = record_with(&[("A", 10.0), ("B", 4.0), ("C", 99.0)]);

        assert_eq!(table.estimate(&record), 12.0);
    }

    #[test]
    fn test_missing_sources_read_as_zero() {
        let table = EmissionFactorTable::new(HashMap::from([
            ("A".to_string(), 1.0),
            ("B".to_string(), 0.5),
        ]));
        let record = record_with(&[("A", 3.0)]);

        assert_eq!(table.estimate(&record), 3.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let table = EmissionFactorTable::new(HashMap::from([("A".to_string(), 0.333)]));
        let record = record_with(&[("A", 1.0)]);

        assert_eq!(table.estimate(&record), 0.33);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let table = EmissionFactorTable::default();
        let mut record = record_with(&[("Nhiệt điện than", 100.0), ("Nhiệt điện dầu", 10.0)]);

        let first = table.estimate(&record);
        table.apply(&mut record);
        let second = table.estimate(&record);

        assert_eq!(first, second);
        assert_eq!(record.co2_estimate, Some(first));
    }

    #[test]
    fn test_default_factors() {
        let table = EmissionFactorTable::default();
        let record = record_with(&[
            ("Nhiệt điện than", 100.0),
            ("Tuabin khí (Gas + Dầu DO)", 100.0),
            ("Nhiệt điện dầu", 100.0),
            ("Khác (Sinh khối, Diesel Nam, …)", 100.0),
            ("Thủy điện", 500.0),
        ]);

        // 100 + 55 + 80 + 20; hydro carries no factor
        assert_eq!(table.estimate(&record), 255.0);
    }

    #[test]
    fn test_empty_record_estimates_zero() {
        let table = EmissionFactorTable::default();
        let record = DailyRecord::new("01-01-2024");
        assert_eq!(table.estimate(&record), 0.0);
    }
}
