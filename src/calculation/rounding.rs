//! Rounding helpers.
//!
//! Figures are rounded half away from zero at every subtotal, not once at the
//! end, so a period total is the sum of already-rounded weekly figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, half away from zero.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::round2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::new(12345, 3)), Decimal::new(1235, 2)); // 12.345 -> 12.35
/// assert_eq!(round2(Decimal::new(12344, 3)), Decimal::new(1234, 2)); // 12.344 -> 12.34
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to four decimal places, half away from zero. Used for hourly rates.
pub fn round4(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a minute count to hours rounded to two decimals.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    round2(Decimal::from(minutes) / Decimal::from(60))
}
