//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named French public holiday (jour férié).
///
/// Generated on demand per calendar year by
/// [`public_holidays`](crate::calculation::public_holidays); never persisted.
///
/// # Example
///
/// ```
/// use jardinerie_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
///     name: "Bastille Day".to_string(),
/// };
/// assert_eq!(holiday.to_string(), "Bastille Day (2024-07-14)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}
