//! Error types for the toolbelt-calendar crate.

/// Error type for all fallible operations in the toolbelt-calendar crate.
///
/// The raw ordinal formulas never fail; these variants come from the
/// checked constructors and the supported-range guards.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year lies outside `MIN_YEAR..=MAX_YEAR`.
    #[error("year {year} is outside the supported range")]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
    },

    /// Returned when an ordinal lies outside `MIN_ORDINAL..=MAX_ORDINAL`.
    #[error("ordinal {ordinal} is outside the supported range")]
    OrdinalOutOfRange {
        /// The rejected ordinal.
        ordinal: i64,
    },
}
