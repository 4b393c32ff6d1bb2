//! Calendar dates in the `YYYY-MM-DD` wire format.

use chrono::NaiveDate;
use serde::Serializer;

use crate::DateRangeError;

/// Format used for dates in request URLs and end-of-day responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the string is not a valid date in that format.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

/// Serializes an optional date as `YYYY-MM-DD`.
///
/// Intended for `#[serde(serialize_with = "...")]` on query parameter fields
/// that also carry `skip_serializing_if = "Option::is_none"`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize_opt_date<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_none(),
    }
}

/// An inclusive range of calendar dates for historical queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First date (inclusive).
    pub from: NaiveDate,
    /// Last date (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that from <= to.
    ///
    /// # Errors
    ///
    /// Returns an error if from > to.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        if from > to {
            return Err(DateRangeError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", format_date(self.from), format_date(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let encoded = format_date(date);
        assert_eq!(encoded, "2024-01-01");
        assert_eq!(parse_date(&encoded).unwrap(), date);
    }

    #[test]
    fn test_format_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(987, 3, 9).unwrap();
        assert_eq!(format_date(date), "0987-03-09");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_date("01/02/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_date_range_new() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let range = DateRange::new(from, to).unwrap();

        assert_eq!(range.from, from);
        assert_eq!(range.to, to);
    }

    #[test]
    fn test_date_range_invalid() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            DateRange::new(from, to),
            Err(DateRangeError::InvalidRange { from, to })
        );
    }

    #[test]
    fn test_same_day_range_display() {
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let range = DateRange::new(day, day).unwrap();
        assert_eq!(range.to_string(), "2024-04-01 to 2024-04-01");
    }
}
