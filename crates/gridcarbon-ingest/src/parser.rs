//! Fuel-mix HTML table parser
//!
//! The operator page renders the daily fuel mix as repeated two-column rows:
//! a source label and a numeric reading. This parser is coupled to that
//! markup (row and column class names); if the page structure changes, every
//! day degrades to an empty record and is discarded upstream.

use gridcarbon_common::DailyRecord;
use scraper::{Html, Selector};

/// Extract a day's fuel-mix record from the operator page HTML.
///
/// Returns `None` when no numeric source fields could be collected, which
/// callers treat as "no data for this day".
pub fn parse_daily_mix(html: &str, day: &str) -> Option<DailyRecord> {
    let document = Html::parse_document(html);

    // Each reading is a .row.py-2 with two .col.px-5 cells: label, value
    let row_selector = Selector::parse("div.row.py-2").unwrap();
    let col_selector = Selector::parse("div.col.px-5").unwrap();

    let mut record = DailyRecord::new(day);

    for row in document.select(&row_selector) {
        let cols: Vec<_> = row.select(&col_selector).collect();
        if cols.len() < 2 {
            continue;
        }

        let raw_label = cols[0].text().collect::<String>();
        let raw_value = cols[1].text().collect::<String>();

        let label = normalize_label(&raw_label);
        if label.is_empty() {
            continue;
        }

        // The page uses a comma decimal separator
        let value_text = raw_value.trim().replace(',', ".");
        match value_text.parse::<f64>() {
            Ok(value) => {
                record.sources.insert(label, value);
            },
            Err(_) => {
                // Malformed cell: skip the row, keep the rest of the record
                continue;
            },
        }
    }

    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Trim whitespace and strip the leading "- " list marker from a source label
fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix("- ").unwrap_or(trimmed).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn row(label: &str, value: &str) -> String {
        format!(
            r#"<div class="row py-2">
                 <div class="col px-5">{}</div>
                 <div class="col px-5">{}</div>
               </div>"#,
            label, value
        )
    }

    fn page(rows: &[String]) -> String {
        format!("<html><body><div>{}</div></body></html>", rows.join("\n"))
    }

    #[test]
    fn test_round_trip_known_pairs() {
        let html = page(&[
            row("- Thủy điện", "242.5"),
            row("- Nhiệt điện than", "415"),
            row("- Điện gió", "12,75"),
        ]);

        let record = parse_daily_mix(&html, "01-01-2024").unwrap();
        assert_eq!(record.day, "01-01-2024");
        assert_eq!(record.sources.len(), 3);
        assert_eq!(record.sources["Thủy điện"], 242.5);
        assert_eq!(record.sources["Nhiệt điện than"], 415.0);
        assert_eq!(record.sources["Điện gió"], 12.75);
        assert!(record.co2_estimate.is_none());
    }

    #[test]
    fn test_label_without_marker_kept_as_is() {
        let html = page(&[row("Nhập khẩu điện", "3.1")]);
        let record = parse_daily_mix(&html, "01-01-2024").unwrap();
        assert_eq!(record.sources["Nhập khẩu điện"], 3.1);
    }

    #[test]
    fn test_comma_decimal_separator() {
        let html = page(&[row("- A", "1,5")]);
        let record = parse_daily_mix(&html, "01-01-2024").unwrap();
        assert_eq!(record.sources["A"], 1.5);
    }

    #[test]
    fn test_malformed_value_skips_row_only() {
        let html = page(&[row("- A", "not a number"), row("- B", "2.0")]);
        let record = parse_daily_mix(&html, "01-01-2024").unwrap();
        assert_eq!(record.sources.len(), 1);
        assert_eq!(record.sources["B"], 2.0);
    }

    #[test]
    fn test_row_with_single_column_skipped() {
        let html = page(&[
            r#"<div class="row py-2"><div class="col px-5">lonely</div></div>"#.to_string(),
            row("- B", "2.0"),
        ]);
        let record = parse_daily_mix(&html, "01-01-2024").unwrap();
        assert_eq!(record.sources.len(), 1);
    }

    #[test]
    fn test_extra_row_classes_still_match() {
        let html = page(&[r#"<div class="row py-2 border-bottom">
                 <div class="col px-5">- A</div>
                 <div class="col px-5">7</div>
               </div>"#
            .to_string()]);
        let record = parse_daily_mix(&html, "01-01-2024").unwrap();
        assert_eq!(record.sources["A"], 7.0);
    }

    #[test]
    fn test_empty_page_yields_no_record() {
        assert!(parse_daily_mix("<html><body></body></html>", "01-01-2024").is_none());
    }

    #[test]
    fn test_all_rows_malformed_yields_no_record() {
        let html = page(&[row("- A", "n/a"), row("- B", "--")]);
        assert!(parse_daily_mix(&html, "01-01-2024").is_none());
    }
}
