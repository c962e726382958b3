//! Time arithmetic over "HH:MM" day entries.
//!
//! Times are handled as minute offsets from midnight of the entry's date. A
//! shift whose end is at or before its start crosses midnight, so its end
//! offset is extended past 1440.
//!
//! Parsing is permissive: an empty or malformed time never raises an error.
//! [`to_minutes`] maps it to 0, and [`shift_span`] treats the entry as a day
//! without hours.

use rust_decimal::Decimal;

use crate::config::NightWindow;
use crate::models::DayEntry;

use super::rounding::minutes_to_hours;

/// Minutes in a day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Parses a strict "HH:MM" time into minutes since midnight.
///
/// Accepts 00:00 to 23:59, plus 24:00 as end of day.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::parse_hhmm;
///
/// assert_eq!(parse_hhmm("09:30"), Some(570));
/// assert_eq!(parse_hhmm("24:00"), Some(1440));
/// assert_eq!(parse_hhmm("25:00"), None);
/// assert_eq!(parse_hhmm(""), None);
/// ```
pub fn parse_hhmm(value: &str) -> Option<i64> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;

    let valid = match hours {
        0..=23 => (0..60).contains(&minutes),
        24 => minutes == 0,
        _ => false,
    };
    valid.then_some(hours * 60 + minutes)
}

/// Converts "HH:MM" to minutes since midnight; empty or malformed input is 0.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::to_minutes;
///
/// assert_eq!(to_minutes("17:45"), 1065);
/// assert_eq!(to_minutes(""), 0);
/// assert_eq!(to_minutes("noon"), 0);
/// ```
pub fn to_minutes(value: &str) -> i64 {
    parse_hhmm(value).unwrap_or(0)
}

/// Returns the shift as `(start, end)` minute offsets from the entry's midnight.
///
/// `end` is extended by a day when it is at or before `start`. Returns `None`
/// when either time is missing or malformed.
pub fn shift_span(entry: &DayEntry) -> Option<(i64, i64)> {
    if !entry.has_times() {
        return None;
    }
    let start = parse_hhmm(&entry.start)?;
    let mut end = parse_hhmm(&entry.end)?;
    if end <= start {
        end += MINUTES_PER_DAY;
    }
    Some((start, end))
}

/// Returns the minutes worked, net of break and never negative.
pub fn worked_minutes(entry: &DayEntry) -> i64 {
    shift_span(entry)
        .map(|(start, end)| (end - start - entry.break_minutes()).max(0))
        .unwrap_or(0)
}

/// Calculates the hours worked for a day entry.
///
/// # Returns
///
/// Worked hours net of break, rounded half-up to two decimals:
/// - 0 when start or end is missing
/// - `end ≤ start` is an overnight shift (adds 24 hours)
/// - a break longer than the shift yields 0, never a negative value
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::daily_hours;
/// use jardinerie_engine::models::DayEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
///
/// assert_eq!(daily_hours(&DayEntry::new(date, "09:00", "17:00", 60)), Decimal::from(7));
/// assert_eq!(daily_hours(&DayEntry::new(date, "22:00", "06:00", 0)), Decimal::from(8));
/// assert_eq!(daily_hours(&DayEntry::new(date, "09:00", "10:00", 120)), Decimal::ZERO);
/// ```
pub fn daily_hours(entry: &DayEntry) -> Decimal {
    minutes_to_hours(worked_minutes(entry))
}

/// Length of the intersection of two half-open minute intervals.
pub(crate) fn overlap_minutes(a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.1.min(b.1) - a.0.max(b.0)).max(0)
}

/// Expands the night window into half-open intervals over the start day and the next day.
///
/// A window wrapping past midnight (21:00-06:00) covers the start day's early
/// morning and evening, then the next day's early morning only.
fn night_intervals(window: &NightWindow) -> Vec<(i64, i64)> {
    let start = to_minutes(&window.start);
    let end = to_minutes(&window.end);

    if start > end {
        vec![
            (0, end),
            (start, MINUTES_PER_DAY),
            (MINUTES_PER_DAY, MINUTES_PER_DAY + end),
        ]
    } else if start < end {
        vec![(start, end), (MINUTES_PER_DAY + start, MINUTES_PER_DAY + end)]
    } else {
        Vec::new()
    }
}

/// Returns the minutes of the shift inside the night window.
pub fn night_minutes(entry: &DayEntry, window: &NightWindow) -> i64 {
    let Some(span) = shift_span(entry) else {
        return 0;
    };

    night_intervals(window)
        .into_iter()
        .map(|interval| overlap_minutes(span, interval))
        .sum()
}

/// Calculates the hours of a shift falling inside the night window.
///
/// The window applies to the start day and, for overnight shifts, to the
/// early morning of the next day. Breaks are not deducted.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::night_hours;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::DayEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// let window = &config.limits().night_window;
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
///
/// // Only 21:00-22:00 is night work
/// assert_eq!(night_hours(&DayEntry::new(date, "20:00", "22:00", 0), window), Decimal::ONE);
/// ```
pub fn night_hours(entry: &DayEntry, window: &NightWindow) -> Decimal {
    minutes_to_hours(night_minutes(entry, window))
}
