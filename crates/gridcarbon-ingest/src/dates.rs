//! Calendar day parsing and range enumeration
//!
//! The operator page keys everything by dd-mm-yyyy day strings, so that format
//! is the identity format throughout the pipeline.

use chrono::NaiveDate;
use gridcarbon_common::InvalidRangeError;

const DAY_FORMAT: &str = "%d-%m-%Y";

/// Parse a dd-mm-yyyy day string
pub fn parse_day(input: &str) -> Result<NaiveDate, InvalidRangeError> {
    NaiveDate::parse_from_str(input, DAY_FORMAT)
        .map_err(|_| InvalidRangeError::MalformedDate(input.to_string()))
}

/// Format a date back to the dd-mm-yyyy identity key
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Expand an inclusive start/end pair into the ordered sequence of days.
///
/// Fails when either bound fails to parse or when start is after end; those
/// are the only fatal conditions anywhere in the pipeline.
pub fn enumerate_days(start: &str, end: &str) -> Result<Vec<NaiveDate>, InvalidRangeError> {
    let start_day = parse_day(start)?;
    let end_day = parse_day(end)?;

    if start_day > end_day {
        return Err(InvalidRangeError::StartAfterEnd {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut days = Vec::new();
    let mut current = start_day;
    while current <= end_day {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break, // end of chrono's representable range
        }
    }

    Ok(days)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_round_trip() {
        let day = parse_day("05-03-2024").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(format_day(day), "05-03-2024");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_day("2024-01-05").is_err());
        assert!(parse_day("5-1-24").is_err());
        assert!(parse_day("32-01-2024").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn test_enumerate_inclusive_and_increasing() {
        let days = enumerate_days("30-12-2023", "02-01-2024").unwrap();
        assert_eq!(days.len(), 4);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
        assert_eq!(format_day(days[0]), "30-12-2023");
        assert_eq!(format_day(days[3]), "02-01-2024");
    }

    #[test]
    fn test_enumerate_single_day() {
        let days = enumerate_days("01-01-2024", "01-01-2024").unwrap();
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn test_enumerate_day_count_property() {
        // (end - start in days) + 1 dates, for a few spans
        for span in [0i64, 1, 7, 31, 365] {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let end = start + chrono::Duration::days(span);
            let days = enumerate_days(&format_day(start), &format_day(end)).unwrap();
            assert_eq!(days.len() as i64, span + 1);
        }
    }

    #[test]
    fn test_enumerate_inverted_range_fails() {
        let err = enumerate_days("05-01-2024", "01-01-2024").unwrap_err();
        assert!(matches!(err, InvalidRangeError::StartAfterEnd { .. }));
    }

    #[test]
    fn test_enumerate_malformed_date_fails() {
        let err = enumerate_days("not-a-date", "01-01-2024").unwrap_err();
        assert!(matches!(err, InvalidRangeError::MalformedDate(_)));
    }

    #[test]
    fn test_enumerate_is_restartable() {
        let first = enumerate_days("01-01-2024", "03-01-2024").unwrap();
        let second = enumerate_days("01-01-2024", "03-01-2024").unwrap();
        assert_eq!(first, second);
    }
}
