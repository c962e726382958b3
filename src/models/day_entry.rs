//! Day entry model.
//!
//! A [`DayEntry`] is one employee's raw schedule for one calendar day: a start
//! time, an end time and an unpaid break, exactly as typed into a timesheet.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

/// One day's raw schedule for one employee.
///
/// Empty `start` or `end` means no hours were entered (a day off). An `end`
/// at or before `start` means the shift crosses midnight.
///
/// # Example
///
/// ```
/// use jardinerie_engine::models::DayEntry;
/// use chrono::NaiveDate;
///
/// let entry = DayEntry::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), "09:00", "17:00", 60);
/// assert!(entry.has_times());
///
/// let off = DayEntry::day_off(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// assert!(!off.has_times());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Start time as "HH:MM", or empty.
    #[serde(default, deserialize_with = "lenient_time")]
    pub start: String,
    /// End time as "HH:MM", or empty.
    #[serde(default, deserialize_with = "lenient_time")]
    pub end: String,
    /// Unpaid break in minutes.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub break_minutes: i64,
}

impl DayEntry {
    /// Creates an entry with start, end and break.
    pub fn new(
        date: NaiveDate,
        start: impl Into<String>,
        end: impl Into<String>,
        break_minutes: i64,
    ) -> Self {
        Self {
            date,
            start: start.into(),
            end: end.into(),
            break_minutes: break_minutes.max(0),
        }
    }

    /// Creates an entry with no hours.
    pub fn day_off(date: NaiveDate) -> Self {
        Self::new(date, "", "", 0)
    }

    /// Returns true when both start and end were entered.
    pub fn has_times(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }

    /// Returns the break, never negative.
    pub fn break_minutes(&self) -> i64 {
        self.break_minutes.max(0)
    }

    /// Returns true when the entry falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }
}

/// Accepts a string as is; null, numbers and anything else become empty.
fn lenient_time<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Accepts a number or a numeric string; anything else becomes 0.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let minutes = match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    Ok(minutes.max(0))
}
