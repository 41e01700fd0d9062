//! Birth-date parts and calendar validity.
//!
//! The sign-up form collects a birth date as three separate selections. They
//! only become a birth date once all three are present and name a real
//! calendar day; the composed value keeps the parts exactly as selected
//! (`D/M/YYYY`, no zero-padding).

use chrono::NaiveDate;

/// Returns `true` if `day`/`month`/`year` name a real day in the proleptic
/// Gregorian calendar.
///
/// ```
/// use shopfront_core::is_valid_date;
///
/// assert!(is_valid_date(29, 2, 2024));
/// assert!(!is_valid_date(29, 2, 2023));
/// assert!(!is_valid_date(31, 4, 2020));
/// ```
#[must_use]
pub fn is_valid_date(day: u32, month: u32, year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// The three raw date selections from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateParts {
    /// Create date parts from raw strings.
    #[must_use]
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// Returns `true` if none of the parts is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.day.is_empty() && !self.month.is_empty() && !self.year.is_empty()
    }

    /// Numeric `(day, month, year)` if every part is present and numeric.
    ///
    /// Surrounding whitespace is ignored.
    #[must_use]
    pub fn numeric(&self) -> Option<(u32, u32, i32)> {
        if !self.is_complete() {
            return None;
        }

        let day = self.day.trim().parse().ok()?;
        let month = self.month.trim().parse().ok()?;
        let year = self.year.trim().parse().ok()?;
        Some((day, month, year))
    }

    /// Compose the birth date using `is_valid` as the calendar check.
    ///
    /// Returns `None` for partial input, non-numeric parts, or a date the
    /// check rejects.
    #[must_use]
    pub fn compose_with<F>(&self, is_valid: F) -> Option<String>
    where
        F: FnOnce(u32, u32, i32) -> bool,
    {
        let (day, month, year) = self.numeric()?;
        is_valid(day, month, year).then(|| format!("{}/{}/{}", self.day, self.month, self.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date_is_composed_unpadded() {
        let parts = DateParts::new("15", "6", "1990");
        assert_eq!(parts.compose_with(is_valid_date).as_deref(), Some("15/6/1990"));

        let parts = DateParts::new("1", "1", "2000");
        assert_eq!(parts.compose_with(is_valid_date).as_deref(), Some("1/1/2000"));
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert_eq!(DateParts::new("31", "2", "2021").compose_with(is_valid_date), None);
        assert_eq!(DateParts::new("31", "4", "2021").compose_with(is_valid_date), None);
        assert_eq!(DateParts::new("0", "4", "2021").compose_with(is_valid_date), None);
        assert_eq!(DateParts::new("1", "13", "2021").compose_with(is_valid_date), None);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_valid_date(29, 2, 2000));
        assert!(is_valid_date(29, 2, 2024));
        assert!(!is_valid_date(29, 2, 1900));
        assert!(!is_valid_date(29, 2, 2023));
    }

    #[test]
    fn test_partial_input_is_not_composed() {
        assert_eq!(DateParts::new("15", "6", "").compose_with(is_valid_date), None);
        assert_eq!(DateParts::new("", "6", "1990").compose_with(is_valid_date), None);
        assert_eq!(DateParts::default().compose_with(is_valid_date), None);
    }

    #[test]
    fn test_non_numeric_parts() {
        assert_eq!(DateParts::new("x", "6", "1990").numeric(), None);
        assert_eq!(DateParts::new("1.5", "6", "1990").compose_with(is_valid_date), None);
        assert_eq!(DateParts::new(" 15 ", "6", "1990").numeric(), Some((15, 6, 1990)));
    }

    #[test]
    fn test_compose_delegates_to_check() {
        let parts = DateParts::new("15", "6", "1990");
        assert_eq!(parts.compose_with(|_, _, _| false), None);

        let parts = DateParts::new("31", "2", "2021");
        assert_eq!(
            parts.compose_with(|d, m, y| (d, m, y) == (31, 2, 2021)).as_deref(),
            Some("31/2/2021")
        );
    }
}
