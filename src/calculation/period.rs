//! Period processing.
//!
//! This module is the entry point of the engine. It runs two passes over a
//! list of day entries:
//!
//! 1. **Per day**, in input order: worked hours, night hours, Sunday and
//!    holiday flags, daily warnings.
//! 2. **Per ISO week**, in chronological order: overtime classification, pay
//!    estimate, running overtime total, weekly warnings.
//!
//! The weeks are then reduced into period totals. Every aggregate is rounded
//! to two decimals where it is accumulated.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::models::{ContractBase, DailyResult, DayEntry, PeriodPay, PeriodResult, WeeklyResult};

use super::compliance::{annual_quota_warning, daily_warnings, rest_warning, weekly_warnings};
use super::holidays::HolidayCalendar;
use super::iso_week::IsoWeekKey;
use super::overtime::classify;
use super::pay_estimate::{estimate_pay, hourly_rate};
use super::rounding::round2;
use super::time_arithmetic::{MINUTES_PER_DAY, daily_hours, night_hours, shift_span};

/// Per-week accumulator filled during the day pass.
#[derive(Debug, Default)]
struct WeekBucket {
    first_date: Option<NaiveDate>,
    total_hours: Decimal,
    night_hours: Decimal,
    sunday_hours: Decimal,
    holiday_hours: Decimal,
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Processes a list of day entries into daily, weekly and period results.
///
/// # Arguments
///
/// * `entries` - Day entries in any order; input order is kept for `daily_results`
/// * `hourly_rate` - The hourly rate; `None` or a non-positive rate disables pay estimates
/// * `contract_base` - The employee's contract base
/// * `config` - The engine configuration
///
/// # Returns
///
/// A complete [`PeriodResult`] for any input, including an empty list.
/// Weekly results are sorted by ISO week, so `cumulative_overtime` follows
/// calendar order whatever the input order.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::process_entries;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::{ContractBase, DayEntry};
/// use chrono::{Duration, NaiveDate};
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let entries: Vec<DayEntry> = (0..5)
///     .map(|i| DayEntry::new(monday + Duration::days(i), "09:00", "17:00", 60))
///     .collect();
///
/// let result = process_entries(
///     &entries,
///     Some(Decimal::from(15)),
///     ContractBase::Hours35,
///     &EngineConfig::default(),
/// );
///
/// assert_eq!(result.total_hours, Decimal::from(35));
/// assert_eq!(result.total_overtime, Decimal::ZERO);
/// assert_eq!(result.total_pay.unwrap().total, Decimal::from(525));
/// ```
pub fn process_entries(
    entries: &[DayEntry],
    hourly_rate: Option<Decimal>,
    contract_base: ContractBase,
    config: &EngineConfig,
) -> PeriodResult {
    let rate = hourly_rate.filter(|r| *r > Decimal::ZERO);
    let night_window = &config.limits().night_window;
    let mut calendar = HolidayCalendar::new();

    let mut daily_results = Vec::with_capacity(entries.len());
    let mut weeks: BTreeMap<IsoWeekKey, WeekBucket> = BTreeMap::new();

    // Pass 1: per day, in input order.
    for entry in entries {
        let hours_worked = daily_hours(entry);
        let night = night_hours(entry, night_window);
        let holiday = calendar.is_holiday(entry.date).cloned();
        let is_sunday = entry.is_sunday();

        let bucket = weeks.entry(IsoWeekKey::of(entry.date)).or_default();
        bucket.first_date.get_or_insert(entry.date);
        bucket.total_hours = round2(bucket.total_hours + hours_worked);
        bucket.night_hours = round2(bucket.night_hours + night);
        if is_sunday {
            bucket.sunday_hours = round2(bucket.sunday_hours + hours_worked);
        }
        if holiday.is_some() {
            bucket.holiday_hours = round2(bucket.holiday_hours + hours_worked);
        }

        daily_results.push(DailyResult {
            date: entry.date,
            day_name: day_name(entry.date.weekday()).to_string(),
            hours_worked,
            night_hours: night,
            is_holiday: holiday.is_some(),
            holiday_name: holiday.map(|h| h.name),
            is_sunday,
            warnings: daily_warnings(entry, hours_worked, config),
        });
    }

    apply_rest_warnings(entries, &mut daily_results, config);

    // Pass 2: per ISO week, chronologically.
    let mut weekly_results = Vec::with_capacity(weeks.len());
    let mut history: Vec<(NaiveDate, Decimal)> = Vec::with_capacity(weeks.len());
    let mut cumulative_overtime = Decimal::ZERO;
    let mut period_pay = PeriodPay::default();

    for (key, bucket) in weeks {
        let week_start = key
            .monday()
            .or(bucket.first_date)
            .unwrap_or(NaiveDate::MIN);

        let overtime_breakdown = classify(bucket.total_hours, contract_base, config);
        let pay = estimate_pay(
            bucket.total_hours,
            rate,
            contract_base,
            bucket.sunday_hours,
            bucket.holiday_hours,
            config,
        );

        cumulative_overtime = round2(cumulative_overtime + overtime_breakdown.total_overtime);

        history.push((week_start, bucket.total_hours));
        let (rolling_average, window_weeks) = rolling_average(&history, week_start, config);
        let warnings = weekly_warnings(bucket.total_hours, rolling_average, window_weeks, config);

        if let Some(pay) = &pay {
            period_pay.regular = round2(period_pay.regular + pay.regular_pay);
            period_pay.structural = round2(period_pay.structural + pay.structural_pay);
            period_pay.overtime = round2(period_pay.overtime + pay.overtime_pay);
            period_pay.sunday_premium = round2(period_pay.sunday_premium + pay.sunday_premium);
            period_pay.holiday_premium = round2(period_pay.holiday_premium + pay.holiday_premium);
            period_pay.total = round2(period_pay.total + pay.total_pay);
        }

        debug!(
            week = %key,
            total_hours = %bucket.total_hours,
            overtime = %overtime_breakdown.total_overtime,
            cumulative_overtime = %cumulative_overtime,
            warnings = warnings.len(),
            "Classified week"
        );

        weekly_results.push(WeeklyResult {
            week: key.to_string(),
            week_start,
            total_hours: bucket.total_hours,
            night_hours: bucket.night_hours,
            sunday_hours: bucket.sunday_hours,
            holiday_hours: bucket.holiday_hours,
            overtime_breakdown,
            pay,
            cumulative_overtime,
            warnings,
        });
    }

    let total_hours = round2(daily_results.iter().map(|d| d.hours_worked).sum());
    let total_night_hours = round2(daily_results.iter().map(|d| d.night_hours).sum());
    let total_sunday_hours = round2(weekly_results.iter().map(|w| w.sunday_hours).sum());
    let total_holiday_hours = round2(weekly_results.iter().map(|w| w.holiday_hours).sum());
    let total_overtime = round2(
        weekly_results
            .iter()
            .map(|w| w.overtime_breakdown.total_overtime)
            .sum(),
    );

    let warnings: Vec<_> = annual_quota_warning(total_overtime, config)
        .into_iter()
        .collect();

    let result = PeriodResult {
        daily_results,
        weekly_results,
        total_hours,
        total_night_hours,
        total_sunday_hours,
        total_holiday_hours,
        total_overtime,
        total_pay: rate.map(|_| period_pay),
        hourly_rate: rate,
        contract_base,
        warnings,
    };

    info!(
        entries = entries.len(),
        weeks = result.weekly_results.len(),
        contract_base = %contract_base,
        total_hours = %result.total_hours,
        total_overtime = %result.total_overtime,
        warnings = result.all_warnings().count(),
        "Processed period"
    );

    result
}

/// Processes entries with an hourly rate derived from a gross monthly salary.
///
/// A missing or non-positive salary disables pay estimates, exactly as a
/// missing rate does with [`process_entries`].
pub fn process_entries_with_salary(
    entries: &[DayEntry],
    gross_monthly_salary: Option<Decimal>,
    contract_base: ContractBase,
    config: &EngineConfig,
) -> PeriodResult {
    let rate = hourly_rate(gross_monthly_salary, contract_base, config);
    process_entries(entries, Some(rate), contract_base, config)
}

/// Mean of the weeks present in the averaging window ending at `week_start`.
///
/// Returns the average and how many weeks it covers.
fn rolling_average(
    history: &[(NaiveDate, Decimal)],
    week_start: NaiveDate,
    config: &EngineConfig,
) -> (Decimal, usize) {
    let span_weeks = i64::from(config.limits().average_window_weeks.max(1)) - 1;
    let window_start = week_start
        .checked_sub_signed(Duration::weeks(span_weeks))
        .unwrap_or(NaiveDate::MIN);

    let in_window: Vec<Decimal> = history
        .iter()
        .filter(|(monday, _)| *monday >= window_start && *monday <= week_start)
        .map(|(_, hours)| *hours)
        .collect();

    if in_window.is_empty() {
        return (Decimal::ZERO, 0);
    }

    let sum: Decimal = in_window.iter().sum();
    (round2(sum / Decimal::from(in_window.len())), in_window.len())
}

/// Flags days starting less than the minimum rest after the previous day's shift.
///
/// Only entries on consecutive calendar dates are compared; when a date
/// appears more than once, its first entry with hours is used.
fn apply_rest_warnings(entries: &[DayEntry], daily_results: &mut [DailyResult], config: &EngineConfig) {
    let mut spans: BTreeMap<NaiveDate, (usize, (i64, i64))> = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        if let Some(span) = shift_span(entry) {
            spans.entry(entry.date).or_insert((index, span));
        }
    }

    let mut previous: Option<(NaiveDate, i64)> = None;
    for (date, (index, (start, end))) in spans {
        if let Some((previous_date, previous_end)) = previous
            && previous_date.succ_opt() == Some(date)
            && let Some(warning) = rest_warning(MINUTES_PER_DAY + start - previous_end, config)
        {
            daily_results[index].warnings.push(warning);
        }
        previous = Some((date, end));
    }
}
