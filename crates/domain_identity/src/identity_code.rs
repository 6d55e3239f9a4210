//! PESEL identity codes
//!
//! A PESEL is an 11-digit number laid out as:
//!
//! ```text
//!  Y Y M M D D S S S P C
//!  0 1 2 3 4 5 6 7 8 9 10
//! ```
//!
//! - `YY`: last two digits of the birth year
//! - `MM`: birth month plus a century band offset
//! - `DD`: day of month
//! - `SSS`: serial number
//! - `P`: sex digit, odd for males and even for females
//! - `C`: control digit
//!
//! # Century bands
//!
//! | Birth years | Month offset |
//! |-------------|--------------|
//! | 1800-1899   | +80          |
//! | 1900-1999   | +0           |
//! | 2000-2099   | +20          |
//! | 2100-2199   | +40          |
//! | 2200-2299   | +60          |
//!
//! # Validation against a known birth date
//!
//! A code is never decoded into a date and then compared. Instead the six
//! date digits the code *should* contain are derived from the reference
//! birth date and compared field by field, so a code with a wrong century
//! band is reported as a date mismatch rather than being read as some other
//! valid date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::birth_date::BirthDate;
use crate::error::IdentityCodeError;
use crate::sex::Sex;

/// Number of digits in an identity code
pub const IDENTITY_CODE_LENGTH: usize = 11;

/// Positional weights of the checksum
pub const CHECKSUM_WEIGHTS: [u32; IDENTITY_CODE_LENGTH] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3, 1];

const SEX_DIGIT: usize = 9;
const CONTROL_DIGIT: usize = 10;

/// Century bands as (first year, month offset)
const CENTURY_BANDS: [(i32, u32); 5] = [
    (1800, 80),
    (1900, 0),
    (2000, 20),
    (2100, 40),
    (2200, 60),
];

/// A structurally valid identity code that matched its owner's data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IdentityCode(String);

impl IdentityCode {
    /// Builds a valid code for a birth date and sex
    ///
    /// `serial` fills digits 6-8. The sex digit is derived from the serial
    /// with the parity required by `sex`, and the control digit is computed.
    ///
    /// Returns `None` if `serial` exceeds 999 or the birth year has no
    /// century band.
    pub fn compose(birth_date: NaiveDate, sex: Sex, serial: u16) -> Option<Self> {
        if serial > 999 {
            return None;
        }

        let date_digits = encode_date(birth_date).ok()?;
        let parity = match sex {
            Sex::Male => 1,
            Sex::Female => 0,
        };

        let mut first_ten = [0u8; 10];
        first_ten[..6].copy_from_slice(&date_digits);
        first_ten[6] = (serial / 100) as u8;
        first_ten[7] = (serial / 10 % 10) as u8;
        first_ten[8] = (serial % 10) as u8;
        first_ten[SEX_DIGIT] = (serial % 5) as u8 * 2 + parity;

        let control = checksum_digit(&first_ten);
        let code: String = first_ten
            .iter()
            .chain(std::iter::once(&control))
            .map(|d| char::from(b'0' + d))
            .collect();

        Some(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the sex encoded in the code
    pub fn sex(&self) -> Sex {
        let digit = self.0.as_bytes()[SEX_DIGIT] - b'0';
        Sex::from_parity_digit(digit)
    }

    /// Returns the birth date encoded in the code
    ///
    /// # Errors
    ///
    /// Returns `MalformedPeselDate` if the month band or day is not a real date
    pub fn birth_date(&self) -> Result<NaiveDate, IdentityCodeError> {
        decode_birth_date(&self.0)
    }
}

impl fmt::Display for IdentityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a code into its digits after structural checks
///
/// # Errors
///
/// Returns `Empty`, `WrongLength`, or `NonDigit`, checked in that order
pub fn parse_digits(code: &str) -> Result<[u8; IDENTITY_CODE_LENGTH], IdentityCodeError> {
    if code.trim().is_empty() {
        return Err(IdentityCodeError::Empty);
    }

    let length = code.chars().count();
    if length != IDENTITY_CODE_LENGTH {
        return Err(IdentityCodeError::WrongLength(length));
    }

    let mut digits = [0u8; IDENTITY_CODE_LENGTH];
    for (slot, c) in digits.iter_mut().zip(code.chars()) {
        if !c.is_ascii_digit() {
            return Err(IdentityCodeError::NonDigit);
        }
        *slot = c as u8 - b'0';
    }

    Ok(digits)
}

/// Returns the month offset of the century band containing `year`
pub fn century_offset(year: i32) -> Option<u32> {
    CENTURY_BANDS
        .iter()
        .find(|(start, _)| (*start..*start + 100).contains(&year))
        .map(|(_, offset)| *offset)
}

/// Encodes a birth date as the first six digits of an identity code
///
/// # Errors
///
/// Returns `MalformedPeselDate` if the year lies outside 1800-2299
pub fn encode_date(date: NaiveDate) -> Result<[u8; 6], IdentityCodeError> {
    let offset = century_offset(date.year()).ok_or(IdentityCodeError::MalformedPeselDate)?;
    let year = date.year().rem_euclid(100) as u32;
    let month = date.month() + offset;
    let day = date.day();

    Ok([
        (year / 10) as u8,
        (year % 10) as u8,
        (month / 10) as u8,
        (month % 10) as u8,
        (day / 10) as u8,
        (day % 10) as u8,
    ])
}

/// Decodes the birth date carried by a code
///
/// # Errors
///
/// Returns the structural errors of `parse_digits`, or `MalformedPeselDate`
/// if the month is outside every century band or the day does not exist
pub fn decode_birth_date(code: &str) -> Result<NaiveDate, IdentityCodeError> {
    let digits = parse_digits(code)?;
    let year = pair(&digits, 0) as i32;
    let raw_month = pair(&digits, 2);
    let day = pair(&digits, 4);

    let (century, offset) = CENTURY_BANDS
        .iter()
        .copied()
        .find(|(_, offset)| (offset + 1..=offset + 12).contains(&raw_month))
        .ok_or(IdentityCodeError::MalformedPeselDate)?;

    NaiveDate::from_ymd_opt(century + year, raw_month - offset, day)
        .ok_or(IdentityCodeError::MalformedPeselDate)
}

/// Decodes the sex carried by a code without needing a birth date
///
/// # Errors
///
/// Returns the structural errors of `parse_digits`
pub fn decode_sex(code: &str) -> Result<Sex, IdentityCodeError> {
    let digits = parse_digits(code)?;
    Ok(Sex::from_parity_digit(digits[SEX_DIGIT]))
}

/// Checks a declared sex against the one encoded in a code
///
/// # Errors
///
/// Returns the structural errors of `parse_digits`, or `SexMismatch`
pub fn check_sex(code: &str, declared: Sex) -> Result<(), IdentityCodeError> {
    let encoded = decode_sex(code)?;
    if encoded != declared {
        return Err(IdentityCodeError::SexMismatch { encoded, declared });
    }
    Ok(())
}

/// Returns the weighted digit sum used by the checksum
pub fn weighted_sum(digits: &[u8; IDENTITY_CODE_LENGTH]) -> u32 {
    digits
        .iter()
        .zip(CHECKSUM_WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum()
}

/// Returns whether the weighted digit sum is divisible by ten
pub fn has_valid_checksum(digits: &[u8; IDENTITY_CODE_LENGTH]) -> bool {
    weighted_sum(digits) % 10 == 0
}

/// Computes the control digit completing the first ten digits
pub fn checksum_digit(first_ten: &[u8; 10]) -> u8 {
    let sum: u32 = first_ten
        .iter()
        .zip(CHECKSUM_WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Validates a code against the owner's birth date and sex
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. blank input, length, digits only
/// 2. the date digits equal the encoding of `birth_date`
/// 3. the sex digit parity matches `sex`
/// 4. the weighted checksum
///
/// # Errors
///
/// Returns the `IdentityCodeError` of the first failing check, or
/// `MalformedPeselDate` if `birth_date` has no century band
pub fn validate_identity_code(
    code: &str,
    birth_date: NaiveDate,
    sex: Sex,
) -> Result<IdentityCode, IdentityCodeError> {
    let digits = parse_digits(code)?;

    let expected = encode_date(birth_date)?;
    if digits[..6] != expected {
        return Err(IdentityCodeError::DateMismatch);
    }

    let encoded = Sex::from_parity_digit(digits[SEX_DIGIT]);
    if encoded != sex {
        return Err(IdentityCodeError::SexMismatch {
            encoded,
            declared: sex,
        });
    }

    if !has_valid_checksum(&digits) {
        tracing::trace!(control = digits[CONTROL_DIGIT], "identity code checksum mismatch");
        return Err(IdentityCodeError::ChecksumFailed);
    }

    Ok(IdentityCode(code.to_string()))
}

/// Validates a code against a validated `BirthDate`
///
/// # Errors
///
/// See `validate_identity_code`
pub fn validate_for(
    code: &str,
    birth_date: &BirthDate,
    sex: Sex,
) -> Result<IdentityCode, IdentityCodeError> {
    validate_identity_code(code, birth_date.as_date(), sex)
}

fn pair(digits: &[u8; IDENTITY_CODE_LENGTH], index: usize) -> u32 {
    u32::from(digits[index]) * 10 + u32::from(digits[index + 1])
}
