//! Configuration types for the worked-time engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every threshold and rate
//! the engine applies lives here, so a different agreement can be evaluated
//! by loading a different directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata about the collective agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementMetadata {
    /// The agreement identifier (e.g., "IDCC1760").
    pub code: String,
    /// The human-readable name of the agreement.
    pub name: String,
    /// The version or effective date of the agreement text.
    pub version: String,
    /// URL to the official agreement text.
    pub source_url: String,
}

/// The daily window whose hours count as night work.
///
/// Times are "HH:MM" strings. When `start` is later than `end` the window
/// wraps midnight (the usual 21:00–06:00 case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Start of the night window (inclusive).
    pub start: String,
    /// End of the night window (exclusive).
    pub end: String,
}

/// Legal and contractual limits used for classification and warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Legal weekly working time; hours above it are overtime or structural.
    pub legal_weekly_hours: Decimal,
    /// Maximum hours worked in a single day.
    pub daily_max_hours: Decimal,
    /// Absolute maximum hours worked in a single week.
    pub weekly_max_hours: Decimal,
    /// Maximum average weekly hours over the rolling window.
    pub average_weekly_max_hours: Decimal,
    /// Number of ISO weeks in the rolling average window.
    pub average_window_weeks: u32,
    /// Worked hours from which a break becomes mandatory.
    pub break_threshold_hours: Decimal,
    /// Minimum break once the threshold is reached.
    pub mandatory_break_minutes: i64,
    /// Minimum rest between two consecutive working days.
    pub min_daily_rest_hours: Decimal,
    /// Night work window.
    pub night_window: NightWindow,
}

/// Premium rates applied on top of the hours' regular or overtime pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumConfig {
    /// Sunday surcharge as a fraction of the hourly rate (0.50 = +50%).
    pub sunday: Decimal,
    /// Public holiday surcharge as a fraction of the hourly rate.
    pub holiday: Decimal,
}

/// Overtime bracket configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeConfig {
    /// Multiplier applied to structural hours on a 39h contract.
    pub structural_rate: Decimal,
    /// Weekly hours at which the second bracket starts.
    pub bracket_boundary_hours: Decimal,
    /// Multiplier for the first bracket.
    pub first_bracket_rate: Decimal,
    /// Multiplier for the second bracket.
    pub second_bracket_rate: Decimal,
    /// Annual overtime quota (contingent annuel).
    pub annual_quota_hours: Decimal,
}

/// Rates configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Sunday and holiday premiums.
    pub premiums: PremiumConfig,
    /// Overtime brackets and quota.
    pub overtime: OvertimeConfig,
    /// Monthly hours used to derive an hourly rate, keyed by weekly contract hours.
    pub monthly_hours: BTreeMap<u32, Decimal>,
}

/// The complete engine configuration.
///
/// This struct aggregates all configuration loaded from the YAML files in an
/// agreement configuration directory. It is immutable once built and is
/// passed by reference into every calculation entry point.
///
/// # Example
///
/// ```
/// use jardinerie_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.agreement().code, "IDCC1760");
/// assert_eq!(config.limits().daily_max_hours, Decimal::from(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    agreement: AgreementMetadata,
    limits: LimitsConfig,
    rates: RatesConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(agreement: AgreementMetadata, limits: LimitsConfig, rates: RatesConfig) -> Self {
        Self {
            agreement,
            limits,
            rates,
        }
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.agreement
    }

    /// Returns the limits configuration.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Returns the rates configuration.
    pub fn rates(&self) -> &RatesConfig {
        &self.rates
    }

    /// Returns the overtime configuration.
    pub fn overtime(&self) -> &OvertimeConfig {
        &self.rates.overtime
    }

    /// Returns the premium configuration.
    pub fn premiums(&self) -> &PremiumConfig {
        &self.rates.premiums
    }

    /// Returns a copy of this configuration with the limits replaced.
    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Returns a copy of this configuration with the rates replaced.
    pub fn with_rates(mut self, rates: RatesConfig) -> Self {
        self.rates = rates;
        self
    }
}

impl Default for EngineConfig {
    /// The CCN Jardineries & Graineteries values shipped in `config/idcc_1760`.
    fn default() -> Self {
        let monthly_hours = BTreeMap::from([
            (24, Decimal::new(10400, 2)),
            (32, Decimal::new(13867, 2)),
            (35, Decimal::new(15167, 2)),
            (39, Decimal::new(16900, 2)),
        ]);

        Self {
            agreement: AgreementMetadata {
                code: "IDCC1760".to_string(),
                name: "Convention collective nationale des jardineries et graineteries"
                    .to_string(),
                version: "2024-01-01".to_string(),
                source_url: "https://www.legifrance.gouv.fr/conv_coll/id/KALICONT000005635602"
                    .to_string(),
            },
            limits: LimitsConfig {
                legal_weekly_hours: Decimal::from(35),
                daily_max_hours: Decimal::from(10),
                weekly_max_hours: Decimal::from(48),
                average_weekly_max_hours: Decimal::from(44),
                average_window_weeks: 12,
                break_threshold_hours: Decimal::from(6),
                mandatory_break_minutes: 20,
                min_daily_rest_hours: Decimal::from(11),
                night_window: NightWindow {
                    start: "21:00".to_string(),
                    end: "06:00".to_string(),
                },
            },
            rates: RatesConfig {
                premiums: PremiumConfig {
                    sunday: Decimal::new(50, 2),
                    holiday: Decimal::new(100, 2),
                },
                overtime: OvertimeConfig {
                    structural_rate: Decimal::new(125, 2),
                    bracket_boundary_hours: Decimal::from(43),
                    first_bracket_rate: Decimal::new(125, 2),
                    second_bracket_rate: Decimal::new(150, 2),
                    annual_quota_hours: Decimal::from(220),
                },
                monthly_hours,
            },
        }
    }
}
