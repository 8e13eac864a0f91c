//! Conversion between proleptic Gregorian dates and day ordinals.
//!
//! Both directions use the shifted-year technique: the internal year starts
//! in March, so February (and its leap day) is the last month and the
//! Gregorian leap correction `y/4 - y/100 + y/400` only has to be applied at
//! year boundaries. No month-length table and no leap-year branch is needed.
//!
//! Every division is floor division. Truncating division gives wrong results
//! for negative years and ordinals.

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Largest year accepted by [`CalendarDate::new`].
pub const MAX_YEAR: i64 = 2_500_000_000_000;

/// Smallest year accepted by [`CalendarDate::new`].
pub const MIN_YEAR: i64 = -MAX_YEAR;

/// Ordinal of the last day of `MAX_YEAR`, the largest accepted by [`checked_to_date`].
pub const MAX_ORDINAL: i64 = to_ordinal(MAX_YEAR, 12, 31);

/// Ordinal of the first day of `MIN_YEAR`, the smallest accepted by [`checked_to_date`].
pub const MIN_ORDINAL: i64 = to_ordinal(MIN_YEAR, 1, 1);

// 10000 * ordinal + 14780 in to_date must fit in an i64
const _: () = assert!(MAX_ORDINAL <= (i64::MAX - 14_780) / 10_000);
const _: () = assert!(MIN_ORDINAL >= i64::MIN / 10_000);

/// Ordinal of 1970-01-01.
pub const UNIX_EPOCH_ORDINAL: i64 = 719_468;

/// Integer division rounding toward negative infinity.
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Remainder matching [`floor_div`]; carries the sign of `b`.
pub(crate) const fn floor_mod(a: i64, b: i64) -> i64 {
    a - b * floor_div(a, b)
}

/// Days from the epoch to March 1 of shifted year `y`.
const fn days_before_shifted_year(y: i64) -> i64 {
    365 * y + floor_div(y, 4) - floor_div(y, 100) + floor_div(y, 400)
}

/// Days from March 1 to the first day of shifted month `m` (March = 0).
const fn days_before_shifted_month(m: i64) -> i64 {
    floor_div(m * 306 + 5, 10)
}

/// Converts a date to its ordinal. 0000-03-01 is ordinal 0.
///
/// Nothing is validated: a `day` past the end of its month, or a `month`
/// outside 1..=12, still produces a number, it just won't map back to the
/// same triple. Use [`CalendarDate::new`] when the input needs checking.
///
/// `year` should lie in `MIN_YEAR..=MAX_YEAR`; beyond that the arithmetic
/// can overflow.
///
/// # Example
///
/// ```
/// use toolbelt_calendar::to_ordinal;
///
/// assert_eq!(to_ordinal(2000, 3, 1) - to_ordinal(2000, 2, 29), 1);
/// assert_eq!(to_ordinal(1970, 1, 1), 719_468);
/// ```
pub const fn to_ordinal(year: i64, month: i64, day: i64) -> i64 {
    let m = floor_mod(floor_mod(month, 12) + 9, 12);
    let y = year - m / 10;
    days_before_shifted_year(y) + days_before_shifted_month(m) + (day - 1)
}

/// Converts an ordinal back to a date. Inverse of [`to_ordinal`].
///
/// `ordinal` should lie in `MIN_ORDINAL..=MAX_ORDINAL`; see
/// [`checked_to_date`] for a version that enforces it.
///
/// # Example
///
/// ```
/// use toolbelt_calendar::to_date;
///
/// let date = to_date(-1);
/// assert_eq!((date.year(), date.month(), date.day()), (0, 2, 29));
/// ```
pub fn to_date(ordinal: i64) -> CalendarDate {
    let mut y = floor_div(10_000 * ordinal + 14_780, 3_652_425);
    let mut ddd = ordinal - days_before_shifted_year(y);
    if ddd < 0 {
        y -= 1;
        ddd = ordinal - days_before_shifted_year(y);
    }
    let mi = floor_div(100 * ddd + 52, 3_060);
    let month = floor_mod(mi + 2, 12) + 1;
    let year = y + floor_div(mi + 2, 12);
    let day = ddd - days_before_shifted_month(mi) + 1;
    // month is 1..=12 and day is 1..=31 by construction
    CalendarDate::from_parts(year, month as u8, day as u8)
}

/// Like [`to_date`], but rejects ordinals outside the supported range.
///
/// # Errors
///
/// Returns [`CalendarError::OrdinalOutOfRange`] if `ordinal` is not in
/// `MIN_ORDINAL..=MAX_ORDINAL`.
pub fn checked_to_date(ordinal: i64) -> Result<CalendarDate, CalendarError> {
    if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
        return Err(CalendarError::OrdinalOutOfRange { ordinal });
    }
    Ok(to_date(ordinal))
}
