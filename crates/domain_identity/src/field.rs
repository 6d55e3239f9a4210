//! Form fields collected during intake

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the personal information form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Birthday,
    Gender,
    Email,
    Name,
    Phone,
    Pesel,
}

impl Field {
    /// All fields in the order they are collected
    ///
    /// The birthday and gender come first because the PESEL check needs both.
    pub const COLLECTION_ORDER: [Field; 6] = [
        Field::Birthday,
        Field::Gender,
        Field::Email,
        Field::Name,
        Field::Phone,
        Field::Pesel,
    ];

    /// Returns the label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Field::Birthday => "Birthday",
            Field::Gender => "Gender",
            Field::Email => "Email",
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Pesel => "PESEL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
