//! Gross pay estimation.
//!
//! This module turns a week's classified hours into an indicative gross pay
//! figure. Pay is informational only: without an hourly rate no estimate is
//! produced.
//!
//! ## Components
//!
//! - Regular hours at the hourly rate
//! - Structural hours (39h contracts) at 125%
//! - Overtime brackets at their multiplier
//! - Sunday surcharge of +50% on Sunday hours (CCN 1760)
//! - Public holiday surcharge of +100% on holiday hours
//!
//! Surcharges are additive: those hours are already paid once through the
//! regular or overtime figures.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::EngineConfig;
use crate::models::{ContractBase, PayBreakdown};

use super::overtime::classify;
use super::rounding::{round2, round4};

/// Derives an hourly rate from a gross monthly salary.
///
/// Divides by the fixed monthly-hour divisor of the contract base
/// (151.67 for 35h, 169.00 for 39h) and rounds to four decimals.
///
/// # Returns
///
/// The hourly rate, or zero when the salary is absent or not positive, or
/// when the configuration has no divisor for the base.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::hourly_rate;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::ContractBase;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// let rate = hourly_rate(Some(Decimal::from(1800)), ContractBase::Hours35, &config);
/// assert_eq!(rate, Decimal::new(118679, 4)); // 1800 / 151.67
///
/// assert_eq!(hourly_rate(None, ContractBase::Hours35, &config), Decimal::ZERO);
/// ```
pub fn hourly_rate(
    gross_monthly_salary: Option<Decimal>,
    contract_base: ContractBase,
    config: &EngineConfig,
) -> Decimal {
    let Some(salary) = gross_monthly_salary.filter(|s| *s > Decimal::ZERO) else {
        return Decimal::ZERO;
    };

    match config
        .rates()
        .monthly_hours
        .get(&contract_base.weekly_hours())
        .filter(|divisor| **divisor > Decimal::ZERO)
    {
        Some(divisor) => round4(salary / *divisor),
        None => {
            warn!(
                contract_base = %contract_base,
                "No monthly-hour divisor configured for contract base"
            );
            Decimal::ZERO
        }
    }
}

/// Estimates the gross pay of one week.
///
/// # Arguments
///
/// * `weekly_hours` - Total hours worked in the week
/// * `hourly_rate` - The hourly rate; `None` or a non-positive rate yields no estimate
/// * `contract_base` - The employee's contract base
/// * `sunday_hours` - Hours of the week worked on Sundays
/// * `holiday_hours` - Hours of the week worked on public holidays
/// * `config` - The engine configuration holding rates
///
/// # Returns
///
/// A [`PayBreakdown`] whose components are each rounded to two decimals
/// before being summed into `total_pay`. Each overtime bracket is rounded
/// before the brackets are summed.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::estimate_pay;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::ContractBase;
/// use rust_decimal::Decimal;
///
/// let pay = estimate_pay(
///     Decimal::from(35),
///     Some(Decimal::from(15)),
///     ContractBase::Hours35,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &EngineConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(pay.total_pay, Decimal::from(525));
/// ```
pub fn estimate_pay(
    weekly_hours: Decimal,
    hourly_rate: Option<Decimal>,
    contract_base: ContractBase,
    sunday_hours: Decimal,
    holiday_hours: Decimal,
    config: &EngineConfig,
) -> Option<PayBreakdown> {
    let rate = hourly_rate.filter(|r| *r > Decimal::ZERO)?;
    let breakdown = classify(weekly_hours, contract_base, config);
    let premiums = config.premiums();

    let regular_pay = round2(breakdown.regular_hours * rate);

    let structural_pay = if contract_base.has_structural_hours() {
        round2(breakdown.structural_hours * rate * config.overtime().structural_rate)
    } else {
        Decimal::ZERO
    };

    let overtime_pay = round2(
        breakdown
            .brackets
            .iter()
            .map(|b| round2(b.hours * rate * b.rate))
            .sum(),
    );

    let sunday_premium = round2(sunday_hours * rate * premiums.sunday);
    let holiday_premium = round2(holiday_hours * rate * premiums.holiday);

    let total_pay =
        round2(regular_pay + structural_pay + overtime_pay + sunday_premium + holiday_premium);

    Some(PayBreakdown {
        hourly_rate: rate,
        regular_pay,
        structural_pay,
        overtime_pay,
        sunday_hours: round2(sunday_hours),
        sunday_premium,
        holiday_hours: round2(holiday_hours),
        holiday_premium,
        total_pay,
        breakdown,
    })
}
