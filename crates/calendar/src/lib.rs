//! # toolbelt-calendar
//!
//! Conversion between proleptic Gregorian dates and linear day ordinals.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"to_ordinal()"| B["i64 ordinal"]
//!     B -->|"to_date()"| C["CalendarDate"]
//!     C -->|".ordinal()"| B
//!     C -->|".weekday()"| D["Weekday"]
//!     C -->|"date_sequence()"| E["Vec of CalendarDate"]
//! ```
//!
//! The ordinal counts days from 0000-03-01 (ordinal 0). 1970-01-01 is
//! [`UNIX_EPOCH_ORDINAL`].
//!
//! ## Quick Start
//!
//! ```
//! use toolbelt_calendar::{CalendarDate, to_date, to_ordinal};
//!
//! let g = to_ordinal(2000, 2, 29);
//! assert_eq!(to_date(g), CalendarDate::new(2000, 2, 29).unwrap());
//! assert_eq!(to_ordinal(2000, 3, 1) - g, 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ordinal` | Shifted-year conversion formulas and floor division |
//! | `date` | `CalendarDate` value type and `Weekday` |
//! | `leap` | Gregorian leap-year rule and month lengths |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod leap;
mod ordinal;
mod sequence;

pub use date::{CalendarDate, Weekday};
pub use error::CalendarError;
pub use leap::{days_in_month, days_in_year, is_leap_year};
pub use ordinal::{
    MAX_ORDINAL, MAX_YEAR, MIN_ORDINAL, MIN_YEAR, UNIX_EPOCH_ORDINAL, checked_to_date, to_date,
    to_ordinal,
};
pub use sequence::date_sequence;
