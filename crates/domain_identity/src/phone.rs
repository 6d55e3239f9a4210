//! Polish phone numbers

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::PhoneError;

/// Country calling code every accepted number must start with
pub const COUNTRY_CODE: &str = "+48";

/// Number of digits following the country code
pub const NATIONAL_DIGITS: usize = 9;

/// A Polish phone number, stored as its nine national digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    national: String,
}

impl Phone {
    /// Validates a phone number in `+48 XXX XXX XXX` form
    ///
    /// All whitespace is ignored, so `+48123456789` and `+48 123 456 789`
    /// are the same number.
    ///
    /// # Errors
    ///
    /// Returns `PhoneError` if the input is blank, lacks the `+48` prefix,
    /// has the wrong length, or contains non-digits after the prefix
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        if raw.trim().is_empty() {
            return Err(PhoneError::Empty);
        }

        let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let national = cleaned
            .strip_prefix(COUNTRY_CODE)
            .ok_or(PhoneError::MissingCountryCode)?;

        let length = cleaned.chars().count();
        if length != COUNTRY_CODE.len() + NATIONAL_DIGITS {
            return Err(PhoneError::WrongLength(length));
        }
        if !national.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        Ok(Self {
            national: national.to_string(),
        })
    }

    /// Returns the nine digits after the country code
    pub fn national_number(&self) -> &str {
        &self.national
    }

    /// Returns the number grouped as `+48 XXX XXX XXX`
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = &self.national;
        write!(
            f,
            "{} {} {} {}",
            COUNTRY_CODE,
            &digits[0..3],
            &digits[3..6],
            &digits[6..9]
        )
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
