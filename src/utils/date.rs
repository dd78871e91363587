//! Calendar-date handling for GEDCOM date literals.
//!
//! Dates appear in the input as `DD MMM YYYY` (two-digit day, three-letter
//! month abbreviation, four-digit year), e.g. `21 FEB 1998`.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// The GEDCOM date literal format understood by chrono
pub const GEDCOM_DATE_FORMAT: &str = "%d %b %Y";

/// A non-empty date literal that does not match the expected format,
/// tagged with the record and field it was destined for
#[derive(Debug, Error)]
#[error("invalid date '{value}' for {field} of {record_id}: expected DD MMM YYYY")]
pub struct DateError {
    /// Identifier of the individual or family the date belongs to
    pub record_id: String,
    /// The field the date was being assigned to
    pub field: &'static str,
    /// The offending literal
    pub value: String,
}

/// Parse a GEDCOM date literal for a specific record field
///
/// # Errors
/// Returns a [`DateError`] naming the record and field if `value` does not
/// match `DD MMM YYYY`.
pub fn parse_gedcom_date(
    record_id: &str,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, GEDCOM_DATE_FORMAT).map_err(|_| DateError {
        record_id: record_id.to_string(),
        field,
        value: value.to_string(),
    })
}

/// Render a date back into the GEDCOM literal form, e.g. `10 JAN 1990`
#[must_use]
pub fn format_gedcom_date(date: NaiveDate) -> String {
    date.format(GEDCOM_DATE_FORMAT).to_string().to_uppercase()
}

/// Month-granularity difference from `earlier` to `later` (days ignored)
///
/// Negative when `later` falls in an earlier calendar month than `earlier`.
#[must_use]
pub fn months_between(earlier: NaiveDate, later: NaiveDate) -> i32 {
    (later.year() - earlier.year()) * 12 + (later.month() as i32 - earlier.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gedcom_date() {
        let date = parse_gedcom_date("@I1@", "birth_date", "21 FEB 1998").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1998, 2, 21).unwrap());
    }

    #[test]
    fn test_parse_gedcom_date_mixed_case() {
        let date = parse_gedcom_date("@I1@", "birth_date", "25 Dec 1990").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 12, 25).unwrap());
    }

    #[test]
    fn test_parse_gedcom_date_invalid() {
        let err = parse_gedcom_date("@F1@", "marriage_date", "1998-02-21").unwrap_err();
        assert_eq!(err.record_id, "@F1@");
        assert_eq!(err.field, "marriage_date");
        assert_eq!(err.value, "1998-02-21");
    }

    #[test]
    fn test_format_gedcom_date() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 10).unwrap();
        assert_eq!(format_gedcom_date(date), "10 JAN 1990");
    }

    #[test]
    fn test_months_between() {
        let a = NaiveDate::from_ymd_opt(1990, 1, 10).unwrap();
        let b = NaiveDate::from_ymd_opt(1990, 11, 1).unwrap();
        assert_eq!(months_between(a, b), 10);
        assert_eq!(months_between(b, a), -10);

        // Crosses a year boundary
        let c = NaiveDate::from_ymd_opt(1991, 2, 28).unwrap();
        assert_eq!(months_between(a, c), 13);
    }
}
