//! Advisory warning model.
//!
//! Warnings are the only "errors" the calculation path produces. They are
//! attached to the day, week or period that triggered them and never stop
//! the computation.

use serde::{Deserialize, Serialize};

/// The severity of a [`Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// A legal limit was breached (daily > 10h, weekly > 48h).
    Error,
    /// A soft or advisory breach (missing break, average ceiling at risk).
    Warning,
}

/// An advisory warning attached to a result.
///
/// Serializes its severity under the `type` key.
///
/// # Example
///
/// ```
/// use jardinerie_engine::models::{Warning, WarningSeverity};
///
/// let warning = Warning::error("daily_max_exceeded", "11h worked, daily maximum is 10h");
/// assert_eq!(warning.severity, WarningSeverity::Error);
///
/// let json = serde_json::to_value(&warning).unwrap();
/// assert_eq!(json["type"], "error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Whether this is a legal breach or an advisory.
    #[serde(rename = "type")]
    pub severity: WarningSeverity,
    /// A stable code identifying the rule.
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

impl Warning {
    /// Creates an error-severity warning.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Error,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an advisory warning.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Warning,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns true for legal-limit breaches.
    pub fn is_error(&self) -> bool {
        self.severity == WarningSeverity::Error
    }
}
