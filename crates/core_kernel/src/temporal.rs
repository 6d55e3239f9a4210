//! Calendar helpers
//!
//! This module provides the time source abstraction used by date-sensitive
//! validation and the whole-year age arithmetic built on top of it:
//! - `Clock`: where "today" comes from
//! - `age_on`: completed years between a birth date and a reference date
//! - `days_in_month`: month lengths, leap years included

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Date {date} is after the reference date {reference}")]
    AfterReference {
        date: NaiveDate,
        reference: NaiveDate,
    },

    #[error("Month {0} is out of range")]
    MonthOutOfRange(u32),
}

/// Source of the current calendar date
///
/// Validators never read the system time directly; callers hand them the
/// date obtained from a `Clock` so tests can pin "today".
pub trait Clock {
    /// Returns today's date in the local calendar
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Calculates the number of completed years between `birth` and `reference`
///
/// A year only counts once its anniversary has been reached, so someone born
/// on 29 February is still one year younger on 28 February of a common year.
///
/// # Errors
///
/// Returns `TemporalError::AfterReference` if `birth` is after `reference`
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> Result<u32, TemporalError> {
    if birth > reference {
        return Err(TemporalError::AfterReference {
            date: birth,
            reference,
        });
    }

    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    Ok(age as u32)
}

/// Returns the number of days in `month` of `year`
///
/// # Errors
///
/// Returns `TemporalError::MonthOutOfRange` unless `month` is in 1..=12
pub fn days_in_month(year: i32, month: u32) -> Result<u32, TemporalError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        other => Err(TemporalError::MonthOutOfRange(other)),
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
