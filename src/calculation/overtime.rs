//! Weekly overtime classification.
//!
//! This module splits a week's hours into regular, structural and overtime
//! tiers as per the Code du travail and the CCN Jardineries & Graineteries.
//!
//! ## Regimes
//!
//! **35h base (and any base other than 39h):**
//! - Up to 35h: regular
//! - 35h to 43h: overtime at 125%
//! - Beyond 43h: overtime at 150%
//!
//! **39h base:**
//! - Up to 35h: regular
//! - 35h to 39h: structural (paid in the monthly salary at 125%, capped at 4h)
//! - 39h to 43h: overtime at 125%
//! - Beyond 43h: overtime at 150%

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{ContractBase, OvertimeBracket, OvertimeBreakdown};

use super::rounding::round2;

/// Builds the display label of a bracket from its multiplier (1.25 → "25%").
fn bracket_label(rate: Decimal) -> String {
    let uplift = (rate - Decimal::ONE) * Decimal::from(100);
    format!("{}%", uplift.normalize())
}

/// Classifies a week's hours into regular, structural and overtime tiers.
///
/// Brackets are filled in ascending rate order: each takes
/// `min(remaining, width)` and the filling stops once no overtime remains.
/// The first bracket is anchored on the overtime threshold (35h, or 39h on a
/// 39h contract) and ends at the configured boundary (43h).
///
/// # Arguments
///
/// * `weekly_hours` - Total hours worked in the ISO week
/// * `contract_base` - The employee's contract base, selecting the regime
/// * `config` - The engine configuration holding thresholds and rates
///
/// # Examples
///
/// ## 45 hours on a 35h contract
///
/// ```
/// use jardinerie_engine::calculation::classify;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::ContractBase;
/// use rust_decimal::Decimal;
///
/// let breakdown = classify(Decimal::from(45), ContractBase::Hours35, &EngineConfig::default());
///
/// assert_eq!(breakdown.regular_hours, Decimal::from(35));
/// assert_eq!(breakdown.brackets.len(), 2);
/// assert_eq!(breakdown.brackets[0].label, "25%");
/// assert_eq!(breakdown.brackets[0].hours, Decimal::from(8));
/// assert_eq!(breakdown.brackets[1].label, "50%");
/// assert_eq!(breakdown.brackets[1].hours, Decimal::from(2));
/// ```
///
/// ## 41 hours on a 39h contract
///
/// ```
/// use jardinerie_engine::calculation::classify;
/// use jardinerie_engine::config::EngineConfig;
/// use jardinerie_engine::models::ContractBase;
/// use rust_decimal::Decimal;
///
/// let breakdown = classify(Decimal::from(41), ContractBase::Hours39, &EngineConfig::default());
///
/// assert_eq!(breakdown.regular_hours, Decimal::from(35));
/// assert_eq!(breakdown.structural_hours, Decimal::from(4));
/// assert_eq!(breakdown.brackets.len(), 1);
/// assert_eq!(breakdown.brackets[0].hours, Decimal::from(2));
/// assert_eq!(breakdown.brackets[0].rate, Decimal::new(125, 2));
/// ```
pub fn classify(
    weekly_hours: Decimal,
    contract_base: ContractBase,
    config: &EngineConfig,
) -> OvertimeBreakdown {
    let legal_hours = config.limits().legal_weekly_hours;
    let overtime_config = config.overtime();
    let hours = weekly_hours.max(Decimal::ZERO);

    let regular_hours = round2(hours.min(legal_hours));

    let (structural_hours, threshold) = if contract_base.has_structural_hours() {
        let base_hours = Decimal::from(contract_base.weekly_hours());
        let cap = (base_hours - legal_hours).max(Decimal::ZERO);
        let structural = (hours - legal_hours).max(Decimal::ZERO).min(cap);
        (round2(structural), legal_hours + cap)
    } else {
        (Decimal::ZERO, legal_hours)
    };

    let tiers = [
        (
            Some((overtime_config.bracket_boundary_hours - threshold).max(Decimal::ZERO)),
            overtime_config.first_bracket_rate,
        ),
        (None, overtime_config.second_bracket_rate),
    ];

    let mut remaining = (hours - threshold).max(Decimal::ZERO);
    let mut brackets = Vec::with_capacity(tiers.len());

    for (width, rate) in tiers {
        if remaining <= Decimal::ZERO {
            break;
        }

        let in_bracket = match width {
            Some(width) => remaining.min(width),
            None => remaining,
        };

        if in_bracket > Decimal::ZERO {
            brackets.push(OvertimeBracket {
                label: bracket_label(rate),
                hours: round2(in_bracket),
                rate,
                multiplied_hours: round2(in_bracket * rate),
            });
            remaining -= in_bracket;
        }
    }

    let total_overtime = round2(brackets.iter().map(|b| b.hours).sum());

    OvertimeBreakdown {
        regular_hours,
        structural_hours,
        brackets,
        total_overtime,
        contract_base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run(hours: &str, base: ContractBase) -> OvertimeBreakdown {
        classify(dec(hours), base, &EngineConfig::default())
    }

    fn bracket_hours(breakdown: &OvertimeBreakdown) -> Vec<(Decimal, Decimal)> {
        breakdown.brackets.iter().map(|b| (b.hours, b.rate)).collect()
    }

    // ==========================================================================
    // 35h regime
    // ==========================================================================

    #[test]
    fn test_35h_under_threshold_has_no_overtime() {
        let breakdown = run("30", ContractBase::Hours35);
        assert_eq!(breakdown.regular_hours, dec("30"));
        assert_eq!(breakdown.structural_hours, Decimal::ZERO);
        assert!(breakdown.brackets.is_empty());
        assert_eq!(breakdown.total_overtime, Decimal::ZERO);
    }

    #[test]
    fn test_35h_exactly_35() {
        let breakdown = run("35", ContractBase::Hours35);
        assert_eq!(breakdown.regular_hours, dec("35"));
        assert!(breakdown.brackets.is_empty());
    }

    #[test]
    fn test_35h_45_hours_fills_both_brackets() {
        let breakdown = run("45", ContractBase::Hours35);
        assert_eq!(breakdown.regular_hours, dec("35"));
        assert_eq!(
            bracket_hours(&breakdown),
            vec![(dec("8"), dec("1.25")), (dec("2"), dec("1.50"))]
        );
        assert_eq!(breakdown.brackets[0].multiplied_hours, dec("10"));
        assert_eq!(breakdown.brackets[1].multiplied_hours, dec("3"));
        assert_eq!(breakdown.total_overtime, dec("10"));
    }

    #[test]
    fn test_35h_exactly_43_stays_in_first_bracket() {
        let breakdown = run("43", ContractBase::Hours35);
        assert_eq!(bracket_hours(&breakdown), vec![(dec("8"), dec("1.25"))]);
    }

    #[test]
    fn test_35h_fractional_overtime() {
        let breakdown = run("36.75", ContractBase::Hours35);
        assert_eq!(bracket_hours(&breakdown), vec![(dec("1.75"), dec("1.25"))]);
        assert_eq!(breakdown.brackets[0].multiplied_hours, dec("2.19"));
    }

    #[test]
    fn test_part_time_bases_use_35h_regime() {
        for base in [ContractBase::Hours24, ContractBase::Hours32] {
            let breakdown = run("40", base);
            assert_eq!(breakdown.regular_hours, dec("35"));
            assert_eq!(breakdown.structural_hours, Decimal::ZERO);
            assert_eq!(bracket_hours(&breakdown), vec![(dec("5"), dec("1.25"))]);
            assert_eq!(breakdown.contract_base, base);
        }
    }

    // ==========================================================================
    // 39h regime
    // ==========================================================================

    #[test]
    fn test_39h_41_hours() {
        let breakdown = run("41", ContractBase::Hours39);
        assert_eq!(breakdown.regular_hours, dec("35"));
        assert_eq!(breakdown.structural_hours, dec("4"));
        assert_eq!(bracket_hours(&breakdown), vec![(dec("2"), dec("1.25"))]);
        assert_eq!(breakdown.total_overtime, dec("2"));
    }

    #[test]
    fn test_39h_partial_structural() {
        let breakdown = run("36.5", ContractBase::Hours39);
        assert_eq!(breakdown.regular_hours, dec("35"));
        assert_eq!(breakdown.structural_hours, dec("1.5"));
        assert!(breakdown.brackets.is_empty());
    }

    #[test]
    fn test_39h_exactly_39() {
        let breakdown = run("39", ContractBase::Hours39);
        assert_eq!(breakdown.structural_hours, dec("4"));
        assert_eq!(breakdown.total_overtime, Decimal::ZERO);
    }

    #[test]
    fn test_39h_50_hours_first_bracket_is_4h_wide() {
        let breakdown = run("50", ContractBase::Hours39);
        assert_eq!(breakdown.structural_hours, dec("4"));
        assert_eq!(
            bracket_hours(&breakdown),
            vec![(dec("4"), dec("1.25")), (dec("7"), dec("1.50"))]
        );
        assert_eq!(breakdown.total_overtime, dec("11"));
    }

    #[test]
    fn test_39h_under_legal_week() {
        let breakdown = run("20", ContractBase::Hours39);
        assert_eq!(breakdown.regular_hours, dec("20"));
        assert_eq!(breakdown.structural_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // Edge cases
    // ==========================================================================

    #[test]
    fn test_zero_hours() {
        let breakdown = run("0", ContractBase::Hours35);
        assert_eq!(breakdown.regular_hours, Decimal::ZERO);
        assert!(breakdown.brackets.is_empty());
    }

    #[test]
    fn test_brackets_are_in_ascending_rate_order() {
        let breakdown = run("60", ContractBase::Hours35);
        let rates: Vec<Decimal> = breakdown.brackets.iter().map(|b| b.rate).collect();
        let mut sorted = rates.clone();
        sorted.sort();
        assert_eq!(rates, sorted);
    }

    #[test]
    fn test_bracket_label() {
        assert_eq!(bracket_label(dec("1.25")), "25%");
        assert_eq!(bracket_label(dec("1.50")), "50%");
        assert_eq!(bracket_label(dec("2.00")), "100%");
    }
}
