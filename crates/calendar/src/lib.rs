//! # ethio-calendar
//!
//! Pure date arithmetic for converting Gregorian dates to the Ethiopian
//! calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"GregorianDate::new()"| B["GregorianDate"]
//!     B -->|".day_number()"| C["proleptic day ordinal"]
//!     D["new_year_day(year)"] --> B
//!     B -->|"to_ethiopian()"| E["EthiopianDate"]
//!     E -->|".month_name()"| F["MONTH_NAMES"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use ethio_calendar::{from_gregorian, new_year_day};
//!
//! // Ethiopian New Year 2017 fell on September 11, 2024.
//! let eth = from_gregorian(2024, 9, 11).unwrap();
//! assert_eq!((eth.year(), eth.month(), eth.day()), (2017, 1, 1));
//! assert_eq!(eth.month_name(), "Meskerem");
//! assert_eq!(eth.to_string(), "01 Meskerem 2017");
//!
//! // The anchor rule: Meskerem 1 shifts to September 12 ahead of a
//! // Gregorian leap year.
//! let anchor = new_year_day(2023);
//! assert_eq!(anchor.month_day(), (9, 12));
//! ```
//!
//! The conversion rule is accurate for Gregorian years 1900..=2099.
//! Dates outside that window are accepted and convert deterministically,
//! but correctness is not guaranteed.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Validated Gregorian dates and day-number arithmetic |
//! | `ethiopian` | Ethiopian date entity and month-name tables |
//! | `convert` | New Year anchor rule and the conversion itself |
//! | `error` | Error types |

mod convert;
mod error;
mod ethiopian;
mod gregorian;

pub use convert::{from_gregorian, new_year_day, to_ethiopian};
pub use error::CalendarError;
pub use ethiopian::{
    EthiopianDate, MONTH_NAMES, MONTH_NAMES_AMHARIC, ethiopian_days_in_month,
    is_ethiopian_leap_year,
};
pub use gregorian::{GregorianDate, is_gregorian_leap_year};
