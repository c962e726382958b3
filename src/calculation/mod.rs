//! Calculation logic for the worked-time engine.
//!
//! This module contains the holiday calendar, time arithmetic over "HH:MM"
//! entries, night-window overlap, weekly overtime classification under the
//! 35h and 39h regimes, pay estimation, regulatory limit checks, ISO week
//! grouping, and the period processor that ties them together.

mod compliance;
mod holidays;
mod iso_week;
mod overtime;
mod pay_estimate;
mod period;
mod rounding;
mod time_arithmetic;

pub use compliance::{annual_quota_warning, daily_warnings, rest_warning, weekly_warnings};
pub use holidays::{HolidayCalendar, easter_date, is_holiday, public_holidays};
pub use iso_week::IsoWeekKey;
pub use overtime::classify;
pub use pay_estimate::{estimate_pay, hourly_rate};
pub use period::{process_entries, process_entries_with_salary};
pub use rounding::{minutes_to_hours, round2, round4};
pub use time_arithmetic::{
    MINUTES_PER_DAY, daily_hours, night_hours, night_minutes, parse_hhmm, shift_span, to_minutes,
    worked_minutes,
};
