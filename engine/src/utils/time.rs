//! Time utility functions

use chrono::NaiveDate;

/// Date format accepted for request date bounds
pub const REQUEST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a request-supplied date bound (`2024-01-31`)
///
/// Accepts surrounding whitespace and a trailing `T...` time component,
/// which some drivers append when a date column round-trips as text.
pub fn parse_request_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, REQUEST_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_date_plain() {
        assert_eq!(
            parse_request_date("2024-01-31"),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn test_parse_request_date_trims_whitespace() {
        assert_eq!(
            parse_request_date(" 2024-01-31 "),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn test_parse_request_date_drops_time_component() {
        assert_eq!(
            parse_request_date("2024-06-30T00:00:00"),
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
    }

    #[test]
    fn test_parse_request_date_rejects_garbage() {
        assert_eq!(parse_request_date("31/01/2024"), None);
        assert_eq!(parse_request_date("not a date"), None);
        assert_eq!(parse_request_date(""), None);
    }
}
