//! Ethiopian dates and the fixed month-name tables.

use std::fmt;

use crate::error::CalendarError;

/// English transliterations of the 13 Ethiopian month names,
/// index 0 = Meskerem (month 1) through index 12 = Pagume (month 13).
pub const MONTH_NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehasse", "Pagume",
];

/// Amharic-script spellings of the 13 Ethiopian month names, parallel to
/// [`MONTH_NAMES`]. Display-only alternative; no logic keys off these.
pub const MONTH_NAMES_AMHARIC: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜ",
];

/// Reports whether `year` is a leap year in the Ethiopian calendar.
///
/// Ethiopian leap years satisfy `year % 4 == 3` and give Pagume a sixth
/// day. Within the 1900–2099 Gregorian validity window this coincides
/// with the Gregorian leap year that follows the Ethiopian year's first
/// Gregorian year.
pub fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Returns the number of days in the given Ethiopian month.
///
/// Months 1..=12 always have 30 days; Pagume (month 13) has 5 days, or 6
/// in an Ethiopian leap year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEthiopianMonth`] if `month` is not in
/// 1..=13.
pub fn ethiopian_days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    match month {
        1..=12 => Ok(30),
        13 => Ok(if is_ethiopian_leap_year(year) { 6 } else { 5 }),
        _ => Err(CalendarError::InvalidEthiopianMonth { month }),
    }
}

/// A date in the Ethiopian calendar.
///
/// Values are only produced by the Gregorian conversion, so the fields are
/// always mutually consistent: month in 1..=13, day in 1..=30 for months
/// 1..=12 and within the Pagume length for month 13. The month name is
/// derived from the month number on access and never stored, so the two
/// cannot disagree. Field order (year, month, day) makes the derived
/// ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Assembles a date from fields the converter has already bounded.
    pub(crate) fn from_parts(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=13).contains(&month));
        debug_assert!((1..=30).contains(&day));
        Self { year, month, day }
    }

    /// Returns the Ethiopian year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30, or 1..=6 for Pagume).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the English transliteration of the month name.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Returns the Amharic-script month name.
    pub fn month_name_amharic(self) -> &'static str {
        MONTH_NAMES_AMHARIC[(self.month - 1) as usize]
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {} {}", self.day, self.month_name(), self.year)
    }
}
