//! Sex of the registering person

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SexError;

/// Sex as declared by the user and as encoded in the identity code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parses the single-letter answer to the gender prompt
    ///
    /// Accepts `M` or `F` in either case, surrounding whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns `SexError::Empty` for blank input and `SexError::Invalid`
    /// for anything else that is not `M` or `F`
    pub fn parse(raw: &str) -> Result<Self, SexError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SexError::Empty);
        }

        match trimmed.to_ascii_uppercase().as_str() {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            _ => Err(SexError::Invalid),
        }
    }

    /// Derives the sex from the parity of an identity code digit
    ///
    /// Odd digits encode males, even digits encode females.
    pub fn from_parity_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Returns the single-letter code (`M` or `F`)
    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("Male"),
            Sex::Female => f.write_str("Female"),
        }
    }
}
