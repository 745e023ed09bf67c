//! Gregorian-to-Ethiopian conversion.

use crate::error::CalendarError;
use crate::ethiopian::EthiopianDate;
use crate::gregorian::{GregorianDate, is_gregorian_leap_year};

/// Returns the Gregorian date of Ethiopian New Year (Meskerem 1) within
/// the given Gregorian year.
///
/// The New Year falls on September 11, shifting to September 12 when the
/// following Gregorian year is a leap year. This rule holds for Gregorian
/// years 1900..=2099; outside that window the returned date is still
/// well-formed but no longer guaranteed to match the Ethiopian calendar.
pub fn new_year_day(gregorian_year: i32) -> GregorianDate {
    let day = if is_gregorian_leap_year(gregorian_year + 1) {
        12
    } else {
        11
    };
    GregorianDate::new(gregorian_year, 9, day).expect("September 11 and 12 are always valid")
}

/// Converts a Gregorian date to the corresponding Ethiopian date.
///
/// The anchor is the Meskerem 1 of the input's Gregorian year; inputs
/// before that anchor belong to the Ethiopian year that began on the
/// previous Gregorian year's anchor, which is re-derived with its own
/// leap adjustment. From the whole-day offset between anchor and input,
/// every Ethiopian month is encoded as 30 days, which yields Pagume
/// (month 13, 5 or 6 days) with no special case. An offset of zero maps
/// to Meskerem 1.
///
/// Accurate for inputs within 1900-01-01..=2099-12-31; dates outside the
/// window convert to arithmetically consistent but unguaranteed results.
pub fn to_ethiopian(date: GregorianDate) -> EthiopianDate {
    let mut anchor_year = date.year();
    let mut anchor = new_year_day(anchor_year);
    if date < anchor {
        anchor_year -= 1;
        anchor = new_year_day(anchor_year);
    }

    // 0..=365 whole days since Meskerem 1.
    let diff = date.day_number() - anchor.day_number();
    let month = (diff / 30 + 1) as u8;
    let day = (diff % 30 + 1) as u8;
    EthiopianDate::from_parts(anchor_year - 7, month, day)
}

/// Validates a Gregorian (year, month, day) triple and converts it.
///
/// This is the crate's main entry point for callers holding raw integers.
///
/// # Errors
///
/// Returns [`CalendarError`] if `month` or `day` does not form a real
/// Gregorian calendar date.
pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<EthiopianDate, CalendarError> {
    Ok(to_ethiopian(GregorianDate::new(year, month, day)?))
}
