//! Birth-date option lists.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::forms::CalendarCheck;

/// A month choice: the numeric value posted with the form and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub value: String,
    pub label: &'static str,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Supplies the day, month and year choices for the birth-date selects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateService;

impl DateService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `"1"` through `"31"`.
    #[must_use]
    pub fn days(&self) -> Vec<String> {
        (1..=31).map(|day: u32| day.to_string()).collect()
    }

    /// January through December, valued `"1"` through `"12"`.
    #[must_use]
    pub fn months(&self) -> Vec<MonthOption> {
        MONTH_NAMES
            .into_iter()
            .zip(1_u32..)
            .map(|(label, value)| MonthOption {
                value: value.to_string(),
                label,
            })
            .collect()
    }

    /// The last `years_back` years, newest first, ending with the current year.
    #[must_use]
    pub fn years(&self, years_back: u32) -> Vec<String> {
        Self::years_from(Utc::now().year(), years_back)
    }

    /// `years_back` years counting down from `current_year`.
    #[must_use]
    pub fn years_from(current_year: i32, years_back: u32) -> Vec<String> {
        (0..i64::from(years_back))
            .map(|offset| (i64::from(current_year) - offset).to_string())
            .collect()
    }

    /// The calendar-validity check the birth-date composer uses.
    #[must_use]
    pub const fn calendar(&self) -> CalendarCheck {
        shopfront_core::is_valid_date
    }
}
