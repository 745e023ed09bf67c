//! Error types for the ethio-calendar crate.

/// Error type for all fallible operations in the ethio-calendar crate.
///
/// This enum covers validation failures for Gregorian month numbers and
/// day-within-month values. Validation runs before any calendar
/// arithmetic, so a constructed date is always well-formed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an Ethiopian month number is outside the valid range
    /// 1..=13.
    #[error("invalid Ethiopian month: {month} (must be 1..=13)")]
    InvalidEthiopianMonth {
        /// The invalid month number that was provided.
        month: u8,
    },
}
