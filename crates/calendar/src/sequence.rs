//! Date sequence generation.

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::ordinal::{MAX_ORDINAL, to_date};

/// Generates a contiguous sequence of calendar dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates.
/// Month, leap-day and year boundaries all fall out of the ordinal
/// arithmetic.
///
/// # Errors
///
/// Returns [`CalendarError::OrdinalOutOfRange`] if the last date would fall
/// past the end of the supported range. Nothing is generated in that case.
///
/// # Example
///
/// ```
/// use toolbelt_calendar::{CalendarDate, date_sequence};
///
/// let start = CalendarDate::new(2000, 2, 28).unwrap();
/// let dates = date_sequence(start, 3).unwrap();
/// assert_eq!(dates[1], CalendarDate::new(2000, 2, 29).unwrap());
/// assert_eq!(dates[2], CalendarDate::new(2000, 3, 1).unwrap());
/// ```
pub fn date_sequence(
    start: CalendarDate,
    n_days: usize,
) -> Result<Vec<CalendarDate>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    let first = start.ordinal();
    let last = i64::try_from(n_days - 1)
        .map_or(i64::MAX, |span| first.saturating_add(span));
    if last > MAX_ORDINAL {
        return Err(CalendarError::OrdinalOutOfRange { ordinal: last });
    }
    Ok((first..=last).map(to_date).collect())
}
