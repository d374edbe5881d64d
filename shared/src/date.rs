//! Date display helpers
//!
//! The backend serialises SQL `DATE`/`DATETIME` columns as HTTP dates
//! (`"Tue, 14 Jan 2025 00:00:00 GMT"`). Other deployments hand out ISO-8601
//! strings. The dashboard only ever shows the calendar part, in the same
//! notation it received:
//!
//! | input                              | output               |
//! |------------------------------------|----------------------|
//! | `Tue, 14 Jan 2025 00:00:00 GMT`    | `Tue, 14 Jan 2025`   |
//! | `2025-01-14T08:30:00` / `...Z`     | `2025-01-14`         |
//! | `2025-01-14`                       | `2025-01-14`         |
//! | anything else                      | the input, trimmed   |

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Notation a date was received in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// RFC 1123 / RFC 2822 (`Tue, 14 Jan 2025 00:00:00 GMT`)
    Http,
    /// ISO-8601 / RFC 3339
    Iso,
}

/// Parse a backend date string into its calendar date.
///
/// Returns `None` for anything that is not one of the supported notations.
pub fn parse_date(raw: &str) -> Option<(NaiveDate, DateStyle)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some((dt.date_naive(), DateStyle::Http));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some((dt.date_naive(), DateStyle::Iso));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some((dt.date(), DateStyle::Iso));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| (d, DateStyle::Iso))
}

/// Format a backend date string for a table cell.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some((date, DateStyle::Http)) => date.format("%a, %d %b %Y").to_string(),
        Some((date, DateStyle::Iso)) => date.format("%Y-%m-%d").to_string(),
        None => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_dates_keep_their_notation() {
        assert_eq!(
            display_date("Tue, 14 Jan 2025 00:00:00 GMT"),
            "Tue, 14 Jan 2025"
        );
        assert_eq!(
            display_date("Sun, 05 Oct 2025 17:45:12 GMT"),
            "Sun, 05 Oct 2025"
        );
    }

    #[test]
    fn iso_dates_drop_the_time() {
        assert_eq!(display_date("2025-01-14T08:30:00"), "2025-01-14");
        assert_eq!(display_date("2025-01-14T08:30:00.250Z"), "2025-01-14");
        assert_eq!(display_date("2025-01-14 08:30:00"), "2025-01-14");
        assert_eq!(display_date(" 2025-01-14 "), "2025-01-14");
    }

    #[test]
    fn malformed_input_is_passed_through() {
        assert_eq!(display_date("  soon "), "soon");
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("2025-13-45"), "2025-13-45");
        assert!(parse_date("yesterday").is_none());
    }

    #[test]
    fn parsed_dates_order_chronologically() {
        let (a, _) = parse_date("Mon, 13 Jan 2025 00:00:00 GMT").unwrap();
        let (b, _) = parse_date("2025-01-14").unwrap();
        assert!(a < b);
    }
}
