//! French public holiday calendar.
//!
//! This module computes the eleven public holidays (jours fériés) of a
//! calendar year: eight fixed dates and three that move with Easter.
//!
//! ## Holidays
//!
//! | Date | Name |
//! |---|---|
//! | 01-01 | New Year's Day |
//! | Easter + 1 | Easter Monday |
//! | 05-01 | Labour Day |
//! | 05-08 | Victory 1945 |
//! | Easter + 39 | Ascension Day |
//! | Easter + 50 | Whit Monday |
//! | 07-14 | Bastille Day |
//! | 08-15 | Assumption |
//! | 11-01 | All Saints' Day |
//! | 11-11 | Armistice Day |
//! | 12-25 | Christmas Day |

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Holiday;

const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "New Year's Day"),
    (5, 1, "Labour Day"),
    (5, 8, "Victory 1945"),
    (7, 14, "Bastille Day"),
    (8, 15, "Assumption"),
    (11, 1, "All Saints' Day"),
    (11, 11, "Armistice Day"),
    (12, 25, "Christmas Day"),
];

const EASTER_RELATIVE_HOLIDAYS: [(i64, &str); 3] = [
    (1, "Easter Monday"),
    (39, "Ascension Day"),
    (50, "Whit Monday"),
];

/// Computes Easter Sunday for a Gregorian year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher) with integer
/// arithmetic only.
///
/// # Returns
///
/// The date of Easter Sunday, or `None` when the year is outside the range
/// chrono can represent.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::easter_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_date(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
/// assert_eq!(easter_date(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_date(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = n / 31;
    let day = n % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Returns the public holidays of a year, sorted by date.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::public_holidays;
///
/// let holidays = public_holidays(2024);
/// assert_eq!(holidays.len(), 11);
/// assert_eq!(holidays[0].name, "New Year's Day");
/// ```
pub fn public_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| Holiday {
                date,
                name: name.to_string(),
            })
        })
        .collect();

    if let Some(easter) = easter_date(year) {
        holidays.extend(
            EASTER_RELATIVE_HOLIDAYS
                .iter()
                .filter_map(|&(offset, name)| {
                    easter
                        .checked_add_signed(Duration::days(offset))
                        .map(|date| Holiday {
                            date,
                            name: name.to_string(),
                        })
                }),
        );
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Looks up a date in its year's holiday list.
///
/// Recomputes the year's holidays on every call; use [`HolidayCalendar`] when
/// looking up many dates.
///
/// # Example
///
/// ```
/// use jardinerie_engine::calculation::is_holiday;
/// use chrono::NaiveDate;
///
/// let holiday = is_holiday(NaiveDate::from_ymd_opt(2024, 5, 8).unwrap()).unwrap();
/// assert_eq!(holiday.name, "Victory 1945");
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()).is_none());
/// ```
pub fn is_holiday(date: NaiveDate) -> Option<Holiday> {
    public_holidays(date.year())
        .into_iter()
        .find(|h| h.date == date)
}

/// A holiday lookup that computes each year's list at most once.
///
/// The cache is keyed by year so a lookup never reads another year's list.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    years: HashMap<i32, Vec<Holiday>>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holidays of `year`, computing them on first use.
    pub fn holidays(&mut self, year: i32) -> &[Holiday] {
        self.years
            .entry(year)
            .or_insert_with(|| public_holidays(year))
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn is_holiday(&mut self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays(date.year()).iter().find(|h| h.date == date)
    }
}
