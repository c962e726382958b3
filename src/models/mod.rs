//! Core data models for the worked-time engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod contract;
mod day_entry;
mod holiday;
mod period_result;
mod warning;

pub use breakdown::{OvertimeBracket, OvertimeBreakdown, PayBreakdown};
pub use contract::ContractBase;
pub use day_entry::DayEntry;
pub use holiday::Holiday;
pub use period_result::{DailyResult, PeriodPay, PeriodResult, WeeklyResult};
pub use warning::{Warning, WarningSeverity};
