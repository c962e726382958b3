//! Regulatory limit checks.
//!
//! Every check reports, none rejects: a breach yields a [`Warning`] attached
//! to the day, week or period, and the calculation carries on.
//!
//! | Code | Severity | Rule |
//! |---|---|---|
//! | `daily_max_exceeded` | error | more than 10h in a day |
//! | `break_missing` | warning | 6h or more worked with less than 20 min break |
//! | `daily_rest_insufficient` | warning | less than 11h rest since the previous day |
//! | `weekly_max_exceeded` | error | more than 48h in a week |
//! | `weekly_average_risk` | warning | rolling weekly average above 44h |
//! | `annual_quota_exceeded` | warning | overtime beyond the annual quota |

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{DayEntry, Warning};

use super::rounding::minutes_to_hours;

/// Checks one day's worked hours against the daily maximum and the break rule.
pub fn daily_warnings(entry: &DayEntry, hours_worked: Decimal, config: &EngineConfig) -> Vec<Warning> {
    let limits = config.limits();
    let mut warnings = Vec::new();

    if hours_worked > limits.daily_max_hours {
        warnings.push(Warning::error(
            "daily_max_exceeded",
            format!(
                "{}h worked, daily maximum is {}h",
                hours_worked.normalize(),
                limits.daily_max_hours.normalize()
            ),
        ));
    }

    if hours_worked >= limits.break_threshold_hours
        && entry.break_minutes() < limits.mandatory_break_minutes
    {
        warnings.push(Warning::warning(
            "break_missing",
            format!(
                "{}h worked with a {} min break, at least {} min required from {}h",
                hours_worked.normalize(),
                entry.break_minutes(),
                limits.mandatory_break_minutes,
                limits.break_threshold_hours.normalize()
            ),
        ));
    }

    warnings
}

/// Checks the rest between the end of one shift and the start of the next.
pub fn rest_warning(rest_minutes: i64, config: &EngineConfig) -> Option<Warning> {
    let minimum = config.limits().min_daily_rest_hours;
    let rest_hours = minutes_to_hours(rest_minutes.max(0));

    (rest_hours < minimum).then(|| {
        Warning::warning(
            "daily_rest_insufficient",
            format!(
                "{}h rest since the previous shift, minimum is {}h",
                rest_hours.normalize(),
                minimum.normalize()
            ),
        )
    })
}

/// Checks a week's total against the weekly maximum and its rolling average
/// against the average ceiling.
///
/// `rolling_average` is the mean of the weeks present in the averaging
/// window ending at this week; `window_weeks` is how many weeks it covers.
pub fn weekly_warnings(
    total_hours: Decimal,
    rolling_average: Decimal,
    window_weeks: usize,
    config: &EngineConfig,
) -> Vec<Warning> {
    let limits = config.limits();
    let mut warnings = Vec::new();

    if total_hours > limits.weekly_max_hours {
        warnings.push(Warning::error(
            "weekly_max_exceeded",
            format!(
                "{}h worked, weekly maximum is {}h",
                total_hours.normalize(),
                limits.weekly_max_hours.normalize()
            ),
        ));
    }

    if rolling_average > limits.average_weekly_max_hours {
        warnings.push(Warning::warning(
            "weekly_average_risk",
            format!(
                "{}h average over {} week(s), the {}-week average must stay under {}h",
                rolling_average.normalize(),
                window_weeks,
                limits.average_window_weeks,
                limits.average_weekly_max_hours.normalize()
            ),
        ));
    }

    warnings
}

/// Checks the period's overtime against the annual quota.
pub fn annual_quota_warning(total_overtime: Decimal, config: &EngineConfig) -> Option<Warning> {
    let quota = config.overtime().annual_quota_hours;

    (total_overtime > quota).then(|| {
        Warning::warning(
            "annual_quota_exceeded",
            format!(
                "{}h of overtime, annual quota is {}h",
                total_overtime.normalize(),
                quota.normalize()
            ),
        )
    })
}
