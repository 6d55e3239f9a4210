//! Person names

use serde::Serialize;
use std::fmt;

use crate::error::NameError;

/// Maximum name length, counted in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// A non-blank full name of at most `MAX_NAME_LENGTH` characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Validates a full name
    ///
    /// The value is kept exactly as given. Length is measured in Unicode
    /// scalar values so names with diacritics are not penalised.
    ///
    /// # Errors
    ///
    /// Returns `NameError::Empty` for blank input and `NameError::TooLong`
    /// past the length limit
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.trim().is_empty() {
            return Err(NameError::Empty);
        }

        let length = raw.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(NameError::TooLong {
                max: MAX_NAME_LENGTH,
                actual: length,
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
