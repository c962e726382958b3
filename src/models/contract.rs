//! Contract base model.
//!
//! The contract base is the weekly hour count of an employee's contract. It
//! selects the monthly-hour divisor used to derive an hourly rate, and on a
//! 39h contract it switches the overtime classifier to the structural-hours
//! regime.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The weekly contractual hour base.
///
/// Serialized as its bare hour count (`35`, `39`, ...).
///
/// # Example
///
/// ```
/// use jardinerie_engine::models::ContractBase;
///
/// let base = ContractBase::try_from(39).unwrap();
/// assert_eq!(base, ContractBase::Hours39);
/// assert!(base.has_structural_hours());
/// assert!(ContractBase::try_from(37).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ContractBase {
    /// 24 hours per week (part-time floor).
    Hours24,
    /// 32 hours per week.
    Hours32,
    /// 35 hours per week, the legal working time.
    #[default]
    Hours35,
    /// 39 hours per week, with 4 structural hours paid in the monthly salary.
    Hours39,
}

impl ContractBase {
    /// Returns the weekly hour count of this contract base.
    pub fn weekly_hours(self) -> u32 {
        match self {
            ContractBase::Hours24 => 24,
            ContractBase::Hours32 => 32,
            ContractBase::Hours35 => 35,
            ContractBase::Hours39 => 39,
        }
    }

    /// Returns true when hours between the legal week and this base are structural.
    pub fn has_structural_hours(self) -> bool {
        self == ContractBase::Hours39
    }
}

impl TryFrom<u32> for ContractBase {
    type Error = EngineError;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        match hours {
            24 => Ok(ContractBase::Hours24),
            32 => Ok(ContractBase::Hours32),
            35 => Ok(ContractBase::Hours35),
            39 => Ok(ContractBase::Hours39),
            _ => Err(EngineError::UnsupportedContractBase { hours }),
        }
    }
}

impl From<ContractBase> for u32 {
    fn from(base: ContractBase) -> Self {
        base.weekly_hours()
    }
}

impl std::fmt::Display for ContractBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.weekly_hours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_supported_bases() {
        assert_eq!(ContractBase::try_from(24).unwrap(), ContractBase::Hours24);
        assert_eq!(ContractBase::try_from(32).unwrap(), ContractBase::Hours32);
        assert_eq!(ContractBase::try_from(35).unwrap(), ContractBase::Hours35);
        assert_eq!(ContractBase::try_from(39).unwrap(), ContractBase::Hours39);
    }

    #[test]
    fn test_try_from_unsupported_base() {
        match ContractBase::try_from(40) {
            Err(EngineError::UnsupportedContractBase { hours }) => assert_eq!(hours, 40),
            other => panic!("Expected UnsupportedContractBase, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_legal_week() {
        assert_eq!(ContractBase::default(), ContractBase::Hours35);
    }

    #[test]
    fn test_only_39_has_structural_hours() {
        assert!(ContractBase::Hours39.has_structural_hours());
        assert!(!ContractBase::Hours35.has_structural_hours());
        assert!(!ContractBase::Hours32.has_structural_hours());
        assert!(!ContractBase::Hours24.has_structural_hours());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ContractBase::Hours39).unwrap();
        assert_eq!(json, "39");
    }

    #[test]
    fn test_deserializes_from_number() {
        let base: ContractBase = serde_json::from_str("32").unwrap();
        assert_eq!(base, ContractBase::Hours32);
    }

    #[test]
    fn test_deserialize_rejects_unknown_base() {
        let result: Result<ContractBase, _> = serde_json::from_str("37");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ContractBase::Hours39.to_string(), "39h");
    }
}
