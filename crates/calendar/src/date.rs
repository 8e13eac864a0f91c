//! Proleptic Gregorian date value type.

use std::fmt;

use crate::error::CalendarError;
use crate::leap::days_in_month;
use crate::ordinal::{MAX_YEAR, MIN_YEAR, checked_to_date, floor_mod, to_date, to_ordinal};

/// Ordinal of 0001-01-01, a Monday.
const MONDAY_ORDINAL: i64 = 306;

/// A date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: year 0 is 1 BC, year -1 is 2 BC.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i64,
    month: u8,
    day: u8,
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the weekday of the given ordinal.
    pub fn from_ordinal(ordinal: i64) -> Self {
        Self::ALL[floor_mod(ordinal - MONDAY_ORDINAL, 7) as usize]
    }

    /// Returns the English name of the weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CalendarDate {
    /// Creates a new `CalendarDate`, checking that it names a real day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// [`CalendarError::InvalidDay`] if `day` is not valid for the month
    /// (February 29 is only valid in leap years), and
    /// [`CalendarError::YearOutOfRange`] if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        let max_day = days_in_month(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_parts(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates the date for an ordinal. See [`to_date`].
    pub fn from_ordinal(ordinal: i64) -> Self {
        to_date(ordinal)
    }

    /// Returns the ordinal of this date. See [`to_ordinal`].
    pub fn ordinal(self) -> i64 {
        to_ordinal(self.year, i64::from(self.month), i64::from(self.day))
    }

    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day of the (January-start) year.
    pub fn day_of_year(self) -> u16 {
        (self.ordinal() - to_ordinal(self.year, 1, 1) + 1) as u16
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_ordinal(self.ordinal())
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`] on the last day of `MAX_YEAR`.
    pub fn next(self) -> Result<Self, CalendarError> {
        self.add_days(1)
    }

    /// Returns the preceding day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`] on the first day of `MIN_YEAR`.
    pub fn prev(self) -> Result<Self, CalendarError> {
        self.add_days(-1)
    }

    /// Returns the date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`] if the result falls
    /// outside the supported ordinal range.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        // saturated sums are out of range and reported as such
        checked_to_date(self.ordinal().saturating_add(n))
    }

    /// Returns the number of days from `self` to `other`; negative if
    /// `other` is earlier.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.ordinal() - self.ordinal()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordinal::{MAX_ORDINAL, MIN_ORDINAL};

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2000, 2, 29).unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            CalendarDate::new(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            CalendarDate::new(1900, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
        assert_eq!(
            CalendarDate::new(2021, 4, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                max_day: 30,
            }
        );
        assert!(CalendarDate::new(2021, 4, 0).is_err());
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            CalendarDate::new(MAX_YEAR + 1, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: MAX_YEAR + 1 }
        );
        assert!(CalendarDate::new(MIN_YEAR, 1, 1).is_ok());
    }

    #[test]
    fn ordinal_round_trip() {
        let date = CalendarDate::new(2024, 7, 4).unwrap();
        assert_eq!(CalendarDate::from_ordinal(date.ordinal()), date);
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(CalendarDate::new(1, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(
            CalendarDate::new(1970, 1, 1).unwrap().weekday(),
            Weekday::Thursday
        );
        assert_eq!(
            CalendarDate::new(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
        assert_eq!(
            CalendarDate::new(0, 3, 1).unwrap().weekday(),
            Weekday::Wednesday
        );
    }

    #[test]
    fn weekday_cycles() {
        let start = CalendarDate::new(-1, 12, 25).unwrap();
        let mut date = start;
        for _ in 0..7 {
            date = date.next().unwrap();
        }
        assert_eq!(date.weekday(), start.weekday());
        assert_eq!(start.days_until(date), 7);
    }

    #[test]
    fn day_of_year() {
        assert_eq!(CalendarDate::new(2023, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(CalendarDate::new(2023, 3, 1).unwrap().day_of_year(), 60);
        assert_eq!(CalendarDate::new(2024, 3, 1).unwrap().day_of_year(), 61);
        assert_eq!(CalendarDate::new(2024, 12, 31).unwrap().day_of_year(), 366);
    }

    #[test]
    fn next_leap_day() {
        let date = CalendarDate::new(2000, 2, 28).unwrap();
        let next = date.next().unwrap();
        assert_eq!(next, CalendarDate::new(2000, 2, 29).unwrap());
        assert_eq!(next.next().unwrap(), CalendarDate::new(2000, 3, 1).unwrap());
    }

    #[test]
    fn next_common_february() {
        let date = CalendarDate::new(1900, 2, 28).unwrap();
        assert_eq!(date.next().unwrap(), CalendarDate::new(1900, 3, 1).unwrap());
    }

    #[test]
    fn next_negative_year_boundary() {
        let date = CalendarDate::new(-1, 12, 31).unwrap();
        let next = date.next().unwrap();
        assert_eq!(next, CalendarDate::new(0, 1, 1).unwrap());
        assert_eq!(next.prev().unwrap(), date);
    }

    #[test]
    fn next_and_prev_stop_at_supported_range() {
        let last = CalendarDate::new(MAX_YEAR, 12, 31).unwrap();
        assert_eq!(
            last.next().unwrap_err(),
            CalendarError::OrdinalOutOfRange {
                ordinal: MAX_ORDINAL + 1
            }
        );
        assert_eq!(last.prev().unwrap(), CalendarDate::new(MAX_YEAR, 12, 30).unwrap());

        let first = checked_to_date(MIN_ORDINAL).unwrap();
        assert_eq!(first, CalendarDate::new(MIN_YEAR, 1, 1).unwrap());
        assert_eq!(
            first.prev().unwrap_err(),
            CalendarError::OrdinalOutOfRange {
                ordinal: MIN_ORDINAL - 1
            }
        );
        assert_eq!(first.next().unwrap(), CalendarDate::new(MIN_YEAR, 1, 2).unwrap());
    }

    #[test]
    fn add_days() {
        let date = CalendarDate::new(2000, 1, 1).unwrap();
        assert_eq!(
            date.add_days(366).unwrap(),
            CalendarDate::new(2001, 1, 1).unwrap()
        );
        assert_eq!(
            date.add_days(-1).unwrap(),
            CalendarDate::new(1999, 12, 31).unwrap()
        );
        assert_eq!(
            date.add_days(i64::MAX).unwrap_err(),
            CalendarError::OrdinalOutOfRange { ordinal: i64::MAX }
        );
        assert_eq!(
            date.add_days(i64::MIN).unwrap_err(),
            CalendarError::OrdinalOutOfRange { ordinal: i64::MIN }
        );
    }

    #[test]
    fn ord_follows_chronology() {
        let a = CalendarDate::new(-1, 12, 31).unwrap();
        let b = CalendarDate::new(0, 1, 1).unwrap();
        let c = CalendarDate::new(0, 2, 1).unwrap();
        assert!(a < b && b < c);
        assert!(a.ordinal() < b.ordinal() && b.ordinal() < c.ordinal());
    }

    #[test]
    fn display() {
        assert_eq!(CalendarDate::new(2024, 7, 4).unwrap().to_string(), "2024-07-04");
        assert_eq!(CalendarDate::new(12, 1, 9).unwrap().to_string(), "0012-01-09");
        assert_eq!(CalendarDate::new(-44, 3, 15).unwrap().to_string(), "-0044-03-15");
        assert_eq!(CalendarDate::new(-1, 12, 31).unwrap().to_string(), "-0001-12-31");
        assert_eq!(CalendarDate::new(0, 1, 1).unwrap().to_string(), "0000-01-01");
        assert_eq!(
            CalendarDate::new(-12345, 6, 7).unwrap().to_string(),
            "-12345-06-07"
        );
    }

    #[test]
    fn weekday_display() {
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
    }
}
