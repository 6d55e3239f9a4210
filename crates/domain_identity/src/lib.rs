//! Identity Domain
//!
//! This crate validates the personal information collected when someone
//! registers: birth date, gender, email, name, Polish phone number, and the
//! PESEL national identity number.
//!
//! # Cross-field consistency
//!
//! Most fields are validated independently. The PESEL is the exception: it
//! encodes the owner's birth date and sex, so it is only accepted when it
//! agrees with the birth date and gender collected earlier. See
//! [`identity_code`] for the encoding.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_identity::{BirthDate, FieldValidator, IdentityCodeValidator, Sex};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let birth_date = BirthDate::parse("44/05/14", today).unwrap();
//!
//! let validator = IdentityCodeValidator::new(birth_date, Sex::Male);
//! assert!(validator.validate("44051401359").is_ok());
//!
//! // Right date and sex, wrong control digit
//! let error = validator.validate("44051401358").unwrap_err();
//! assert_eq!(error.to_string(), "Invalid PESEL number! Checksum verification failed.");
//! ```

pub mod birth_date;
pub mod email;
pub mod error;
pub mod field;
pub mod identity_code;
pub mod name;
pub mod phone;
pub mod record;
pub mod sex;
pub mod validation;

pub use birth_date::{BirthDate, MIN_AGE, MAX_AGE};
pub use email::Email;
pub use error::{
    BirthdayError, EmailError, IdentityCodeError, IdentityError, NameError, PhoneError,
    RecordError, SexError,
};
pub use field::Field;
pub use identity_code::{decode_sex, IdentityCode};
pub use name::Name;
pub use phone::Phone;
pub use record::{RecordBuilder, ValidatedRecord};
pub use sex::Sex;
pub use validation::{
    BirthdayValidator, EmailValidator, FieldValidator, IdentityCodeValidator, NameValidator,
    PhoneValidator, SexValidator, Submission, SubmissionValidator, ValidationReport,
};
