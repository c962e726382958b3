//! ISO 8601 week keys.
//!
//! Weeks start on Monday; week 1 is the week containing the year's first
//! Thursday, so early-January dates may belong to the previous ISO year and
//! late-December dates to the next one.

use chrono::{Datelike, NaiveDate, Weekday};

/// An ISO year-week pair, ordered chronologically.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::IsoWeekKey;
/// use chrono::NaiveDate;
///
/// // 2024-12-30 is the Monday of ISO week 1 of 2025
/// let key = IsoWeekKey::of(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
/// assert_eq!(key.to_string(), "2025-W01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeekKey {
    /// The ISO week-numbering year.
    pub year: i32,
    /// The ISO week number (1 to 53).
    pub week: u32,
}

impl IsoWeekKey {
    /// Returns the ISO week containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Returns the Monday starting this week.
    pub fn monday(self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }
}

impl std::fmt::Display for IsoWeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}
