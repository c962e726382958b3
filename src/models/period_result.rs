//! Per-day, per-week and per-period result models.
//!
//! A [`PeriodResult`] is built fresh by each
//! [`process_entries`](crate::calculation::process_entries) call and is never
//! mutated afterward.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ContractBase, OvertimeBreakdown, PayBreakdown, Warning};

/// The computed view of one [`DayEntry`](super::DayEntry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    /// The date of the entry.
    pub date: NaiveDate,
    /// English weekday name (e.g., "Monday").
    pub day_name: String,
    /// Worked hours net of break.
    pub hours_worked: Decimal,
    /// Hours inside the night window.
    pub night_hours: Decimal,
    /// Whether the date is a public holiday.
    pub is_holiday: bool,
    /// The holiday name when `is_holiday`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Whether the date is a Sunday.
    pub is_sunday: bool,
    /// Warnings raised for this day.
    pub warnings: Vec<Warning>,
}

/// The aggregate of one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyResult {
    /// ISO week identifier (e.g., "2024-W10").
    pub week: String,
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    /// Hours worked during the week.
    pub total_hours: Decimal,
    /// Night hours worked during the week.
    pub night_hours: Decimal,
    /// Hours worked on Sundays.
    pub sunday_hours: Decimal,
    /// Hours worked on public holidays.
    pub holiday_hours: Decimal,
    /// Regular/structural/overtime split of `total_hours`.
    pub overtime_breakdown: OvertimeBreakdown,
    /// Estimated pay, when an hourly rate was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<PayBreakdown>,
    /// Running overtime total up to and including this week.
    pub cumulative_overtime: Decimal,
    /// Warnings raised for this week.
    pub warnings: Vec<Warning>,
}

/// Period-level sums of the weekly pay components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPay {
    /// Sum of regular pay.
    pub regular: Decimal,
    /// Sum of structural pay.
    pub structural: Decimal,
    /// Sum of overtime pay.
    pub overtime: Decimal,
    /// Sum of Sunday premiums.
    pub sunday_premium: Decimal,
    /// Sum of holiday premiums.
    pub holiday_premium: Decimal,
    /// Sum of weekly totals.
    pub total: Decimal,
}

/// The complete result of processing a list of day entries.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::process_entries;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::ContractBase;
/// use rust_decimal::Decimal;
///
/// let result = process_entries(&[], None, ContractBase::Hours35, &EngineConfig::default());
/// assert!(result.daily_results.is_empty());
/// assert_eq!(result.total_hours, Decimal::ZERO);
/// assert!(result.total_pay.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// One result per entry, in input order.
    pub daily_results: Vec<DailyResult>,
    /// One result per ISO week, in chronological order.
    pub weekly_results: Vec<WeeklyResult>,
    /// Hours worked over the period.
    pub total_hours: Decimal,
    /// Night hours over the period.
    pub total_night_hours: Decimal,
    /// Sunday hours over the period.
    pub total_sunday_hours: Decimal,
    /// Holiday hours over the period.
    pub total_holiday_hours: Decimal,
    /// Overtime hours over the period.
    pub total_overtime: Decimal,
    /// Estimated pay over the period, when an hourly rate was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pay: Option<PeriodPay>,
    /// The hourly rate used, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    /// The contract base of the employee.
    pub contract_base: ContractBase,
    /// Warnings about the period as a whole.
    pub warnings: Vec<Warning>,
}

impl PeriodResult {
    /// Returns every warning of the period, its weeks and its days.
    pub fn all_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.daily_results
            .iter()
            .flat_map(|d| d.warnings.iter())
            .chain(self.weekly_results.iter().flat_map(|w| w.warnings.iter()))
            .chain(self.warnings.iter())
    }
}
