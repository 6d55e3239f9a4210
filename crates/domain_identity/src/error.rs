//! Identity domain errors
//!
//! This module defines every error a field validator can return. Each field
//! has its own enum so callers can match on precise causes; `IdentityError`
//! unifies them for code that handles any field generically.
//!
//! The `Display` text of every variant is the message shown to the person
//! filling in the form.

use thiserror::Error;

use crate::field::Field;
use crate::sex::Sex;

/// Errors from email address validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email address cannot be empty!")]
    Empty,

    #[error("Invalid email address! Missing @ symbol.")]
    MissingAt,

    #[error("Invalid email address! Should contain exactly one @ symbol.")]
    MultipleAt,

    #[error("Invalid email address! Local part (before @) cannot be empty.")]
    EmptyLocalPart,

    #[error("Invalid email address! Domain part must include an extension (e.g., .com).")]
    DomainWithoutDot,

    #[error("Invalid email format! Please enter a valid email address.")]
    InvalidFormat,
}

/// Errors from name validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name cannot be empty!")]
    Empty,

    #[error("Name cannot be longer than {max} characters!")]
    TooLong { max: usize, actual: usize },
}

/// Errors from Polish phone number validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Phone number cannot be empty!")]
    Empty,

    #[error("Phone number must start with +48 (Polish country code)!")]
    MissingCountryCode,

    #[error("Invalid Polish phone number! Must have 9 digits after +48.")]
    WrongLength(usize),

    #[error("Invalid phone number! Must contain only digits after +48.")]
    NonDigit,
}

/// Errors from birthday validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthdayError {
    #[error("Birthday cannot be empty!")]
    Empty,

    #[error("Birthday must be in format YY/MM/DD (e.g., 90/12/31 for December 31, 1990)!")]
    InvalidFormat,

    #[error("Month must be between 1 and 12!")]
    MonthOutOfRange(u32),

    #[error("Invalid day for month {month}!")]
    DayOutOfRange { day: u32, month: u32 },

    /// The components passed range checks but do not form a calendar date
    #[error("Invalid date! Please enter a valid date in YY/MM/DD format.")]
    InvalidDate,

    #[error("Birthday cannot be in the future!")]
    InFuture,

    #[error("You must be at least {min} years old to register!")]
    TooYoung { min: u32, age: u32 },

    #[error("Please check your birth date. Age cannot be over {max} years!")]
    TooOld { max: u32, age: u32 },
}

/// Errors from gender validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SexError {
    #[error("Gender cannot be empty!")]
    Empty,

    #[error("Gender must be either 'M' for Male or 'F' for Female!")]
    Invalid,
}

/// Errors from identity code (PESEL) validation
///
/// Validation stops at the first failing check, in the order the variants
/// are declared here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityCodeError {
    #[error("PESEL number cannot be empty!")]
    Empty,

    #[error("PESEL number must be exactly 11 digits!")]
    WrongLength(usize),

    #[error("PESEL number must contain only digits!")]
    NonDigit,

    #[error("PESEL number does not match the provided birth date!")]
    DateMismatch,

    #[error("PESEL number indicates {encoded} but you selected {declared}!")]
    SexMismatch { encoded: Sex, declared: Sex },

    #[error("Invalid PESEL number! Checksum verification failed.")]
    ChecksumFailed,

    /// The date portion cannot be mapped onto a supported century band
    #[error("Invalid PESEL number format!")]
    MalformedPeselDate,
}

/// Any field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error(transparent)]
    Birthday(#[from] BirthdayError),

    #[error(transparent)]
    Sex(#[from] SexError),

    #[error(transparent)]
    IdentityCode(#[from] IdentityCodeError),
}

impl IdentityError {
    /// Returns the field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            IdentityError::Email(_) => Field::Email,
            IdentityError::Name(_) => Field::Name,
            IdentityError::Phone(_) => Field::Phone,
            IdentityError::Birthday(_) => Field::Birthday,
            IdentityError::Sex(_) => Field::Gender,
            IdentityError::IdentityCode(_) => Field::Pesel,
        }
    }

    /// Returns a stable machine-readable tag for the failure
    ///
    /// Suitable for logs: it never contains the rejected input.
    pub fn kind(&self) -> &'static str {
        match self {
            IdentityError::Email(e) => match e {
                EmailError::Empty => "email.empty",
                EmailError::MissingAt => "email.missing_at",
                EmailError::MultipleAt => "email.multiple_at",
                EmailError::EmptyLocalPart => "email.empty_local_part",
                EmailError::DomainWithoutDot => "email.domain_without_dot",
                EmailError::InvalidFormat => "email.invalid_format",
            },
            IdentityError::Name(e) => match e {
                NameError::Empty => "name.empty",
                NameError::TooLong { .. } => "name.too_long",
            },
            IdentityError::Phone(e) => match e {
                PhoneError::Empty => "phone.empty",
                PhoneError::MissingCountryCode => "phone.missing_country_code",
                PhoneError::WrongLength(_) => "phone.wrong_length",
                PhoneError::NonDigit => "phone.non_digit",
            },
            IdentityError::Birthday(e) => match e {
                BirthdayError::Empty => "birthday.empty",
                BirthdayError::InvalidFormat => "birthday.invalid_format",
                BirthdayError::MonthOutOfRange(_) => "birthday.month_out_of_range",
                BirthdayError::DayOutOfRange { .. } => "birthday.day_out_of_range",
                BirthdayError::InvalidDate => "birthday.invalid_date",
                BirthdayError::InFuture => "birthday.in_future",
                BirthdayError::TooYoung { .. } => "birthday.too_young",
                BirthdayError::TooOld { .. } => "birthday.too_old",
            },
            IdentityError::Sex(e) => match e {
                SexError::Empty => "gender.empty",
                SexError::Invalid => "gender.invalid",
            },
            IdentityError::IdentityCode(e) => match e {
                IdentityCodeError::Empty => "pesel.empty",
                IdentityCodeError::WrongLength(_) => "pesel.wrong_length",
                IdentityCodeError::NonDigit => "pesel.non_digit",
                IdentityCodeError::DateMismatch => "pesel.date_mismatch",
                IdentityCodeError::SexMismatch { .. } => "pesel.sex_mismatch",
                IdentityCodeError::ChecksumFailed => "pesel.checksum_failed",
                IdentityCodeError::MalformedPeselDate => "pesel.malformed_date",
            },
        }
    }
}

/// Errors raised when assembling a validated record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was never supplied to the builder
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// The identity code does not encode the record's birth date and sex
    #[error("Identity code does not match the record: {0}")]
    InconsistentIdentityCode(IdentityCodeError),
}
