//! Overtime and pay breakdown models.
//!
//! These are produced once per ISO week by the overtime classifier and the
//! pay estimator. Every figure is rounded to two decimals at the point where
//! it is computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ContractBase;

/// Hours falling in one overtime bracket.
///
/// # Example
///
/// ```
/// use jardinerie_engine::models::OvertimeBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = OvertimeBracket {
///     label: "25%".to_string(),
///     hours: Decimal::from(8),
///     rate: Decimal::new(125, 2),
///     multiplied_hours: Decimal::from(10),
/// };
/// assert_eq!(bracket.multiplied_hours, bracket.hours * bracket.rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBracket {
    /// Display label of the uplift (e.g., "25%").
    pub label: String,
    /// Hours in this bracket.
    pub hours: Decimal,
    /// Pay multiplier for this bracket (e.g., 1.25).
    pub rate: Decimal,
    /// `hours × rate`, the hour-equivalent paid for this bracket.
    pub multiplied_hours: Decimal,
}

/// A week's hours split into regular, structural and overtime tiers.
///
/// `brackets` is ordered by ascending rate and only holds brackets with
/// hours in them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// Hours up to the legal week.
    pub regular_hours: Decimal,
    /// Hours between 35 and 39 on a 39h contract; zero otherwise.
    pub structural_hours: Decimal,
    /// Overtime brackets in ascending rate order.
    pub brackets: Vec<OvertimeBracket>,
    /// Sum of the bracket hours.
    pub total_overtime: Decimal,
    /// The contract base that selected the regime.
    pub contract_base: ContractBase,
}

/// Estimated gross pay for one week.
///
/// Sunday and holiday premiums are surcharges on top of the hours' regular or
/// overtime pay; the hours themselves are counted once in the weekly total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The hourly rate used.
    pub hourly_rate: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for structural hours (39h contracts).
    pub structural_pay: Decimal,
    /// Pay for all overtime brackets.
    pub overtime_pay: Decimal,
    /// Hours worked on Sundays.
    pub sunday_hours: Decimal,
    /// Sunday surcharge.
    pub sunday_premium: Decimal,
    /// Hours worked on public holidays.
    pub holiday_hours: Decimal,
    /// Public holiday surcharge.
    pub holiday_premium: Decimal,
    /// Sum of every component above.
    pub total_pay: Decimal,
    /// The classification the pay was computed from.
    pub breakdown: OvertimeBreakdown,
}

impl PayBreakdown {
    /// Returns the regular pay plus the structural pay, the base figure of the week.
    pub fn base_pay(&self) -> Decimal {
        self.regular_pay + self.structural_pay
    }
}
