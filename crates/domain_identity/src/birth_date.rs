//! Birth dates
//!
//! A `BirthDate` can only be constructed for someone who is already born and
//! whose age falls within the accepted registration range.
//!
//! # Input format
//!
//! The prompt accepts `YY/MM/DD` with exactly two digits per group. Two-digit
//! years pivot at 30: `00`-`29` are read as 2000-2029 and `30`-`99` as
//! 1930-1999.
//!
//! Day-of-month bounds are checked against a leap year first, so `29` is
//! always an acceptable February day at that stage; a 29 February that does
//! not exist in the resolved year is then reported as an invalid date.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use core_kernel::{age_on, days_in_month};

use crate::error::BirthdayError;

/// Minimum age, in completed years, to register
pub const MIN_AGE: u32 = 18;

/// Maximum plausible age, in completed years
pub const MAX_AGE: u32 = 120;

/// Two-digit years below this belong to the 2000s
const CENTURY_PIVOT: u32 = 30;

/// Leap year used for day-of-month range checks
const LEAP_REFERENCE_YEAR: i32 = 2000;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{2})$").expect("birthday pattern compiles")
});

/// A validated date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validates a calendar date as a birth date relative to `today`
    ///
    /// # Errors
    ///
    /// Returns `BirthdayError::InFuture` if `date` is after `today`, and
    /// `TooYoung`/`TooOld` if the age falls outside `MIN_AGE..=MAX_AGE`
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, BirthdayError> {
        if date > today {
            return Err(BirthdayError::InFuture);
        }

        let age = age_on(date, today).map_err(|_| BirthdayError::InFuture)?;
        if age < MIN_AGE {
            return Err(BirthdayError::TooYoung { min: MIN_AGE, age });
        }
        if age > MAX_AGE {
            return Err(BirthdayError::TooOld { max: MAX_AGE, age });
        }

        Ok(Self(date))
    }

    /// Parses and validates a `YY/MM/DD` birthday relative to `today`
    ///
    /// # Errors
    ///
    /// Returns the first failing check in this order: blank input, format,
    /// month range, day range, calendar existence, future date, minimum age,
    /// maximum age
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, BirthdayError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(BirthdayError::Empty);
        }

        let captures = BIRTHDAY_REGEX
            .captures(raw)
            .ok_or(BirthdayError::InvalidFormat)?;
        let component = |index: usize| -> Result<u32, BirthdayError> {
            captures[index]
                .parse::<u32>()
                .map_err(|_| BirthdayError::InvalidDate)
        };
        let two_digit_year = component(1)?;
        let month = component(2)?;
        let day = component(3)?;

        let month_length = days_in_month(LEAP_REFERENCE_YEAR, month)
            .map_err(|_| BirthdayError::MonthOutOfRange(month))?;
        if day < 1 || day > month_length {
            return Err(BirthdayError::DayOutOfRange { day, month });
        }

        let year = expand_two_digit_year(two_digit_year);
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(BirthdayError::InvalidDate)?;

        Self::new(date, today)
    }

    /// Returns the underlying calendar date
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the age in completed years on `today`
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.0, today).unwrap_or(0)
    }
}

/// Maps a two-digit year onto 1930-2029
fn expand_two_digit_year(two_digit_year: u32) -> i32 {
    if two_digit_year < CENTURY_PIVOT {
        2000 + two_digit_year as i32
    } else {
        1900 + two_digit_year as i32
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_parse_twentieth_century() {
        let birth_date = BirthDate::parse("90/12/31", today()).unwrap();
        assert_eq!(birth_date.to_string(), "1990-12-31");
    }

    #[test]
    fn test_parse_twenty_first_century() {
        let birth_date = BirthDate::parse("05/01/09", today()).unwrap();
        assert_eq!(birth_date.to_string(), "2005-01-09");
    }

    #[test]
    fn test_century_pivot() {
        assert_eq!(expand_two_digit_year(0), 2000);
        assert_eq!(expand_two_digit_year(29), 2029);
        assert_eq!(expand_two_digit_year(30), 1930);
        assert_eq!(expand_two_digit_year(99), 1999);
    }

    #[test]
    fn test_format_errors() {
        assert_eq!(BirthDate::parse("", today()), Err(BirthdayError::Empty));
        assert_eq!(BirthDate::parse("1990/12/31", today()), Err(BirthdayError::InvalidFormat));
        assert_eq!(BirthDate::parse("90-12-31", today()), Err(BirthdayError::InvalidFormat));
        assert_eq!(BirthDate::parse("9/12/31", today()), Err(BirthdayError::InvalidFormat));
    }

    #[test]
    fn test_month_and_day_ranges() {
        assert_eq!(BirthDate::parse("90/13/01", today()), Err(BirthdayError::MonthOutOfRange(13)));
        assert_eq!(BirthDate::parse("90/00/01", today()), Err(BirthdayError::MonthOutOfRange(0)));
        assert_eq!(
            BirthDate::parse("90/04/31", today()),
            Err(BirthdayError::DayOutOfRange { day: 31, month: 4 })
        );
        assert_eq!(
            BirthDate::parse("90/01/00", today()),
            Err(BirthdayError::DayOutOfRange { day: 0, month: 1 })
        );
    }

    #[test]
    fn test_leap_day() {
        assert!(BirthDate::parse("96/02/29", today()).is_ok());
        assert_eq!(BirthDate::parse("97/02/29", today()), Err(BirthdayError::InvalidDate));
    }

    #[test]
    fn test_age_limits() {
        assert_eq!(
            BirthDate::parse("08/10/17", today()),
            Err(BirthdayError::TooYoung { min: 18, age: 17 })
        );
        assert!(BirthDate::parse("08/10/16", today()).is_ok());
        assert_eq!(BirthDate::parse("27/01/01", today()), Err(BirthdayError::InFuture));
    }

    #[test]
    fn test_too_old_through_new() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(
            BirthDate::new(date, today()),
            Err(BirthdayError::TooOld { max: 120, age: 126 })
        );
    }
}
