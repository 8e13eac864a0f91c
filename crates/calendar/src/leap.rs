//! Gregorian leap-year rule and month lengths.

/// Number of days in each month of a common year (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Years divisible by 4 are leap years, except centuries, which are leap
/// years only when divisible by 400. Year 0 is a leap year.
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` if `month`
/// is not in 1..=12.
pub const fn days_in_month(year: i64, month: u8) -> Option<u8> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS_PER_MONTH[month as usize]),
        _ => None,
    }
}

/// Returns 366 for leap years and 365 otherwise.
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
