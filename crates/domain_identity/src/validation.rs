//! Field validation
//!
//! Every form field has a validator implementing `FieldValidator`: it turns
//! raw text into a typed value and renders that value back for display.
//! Validators that depend on other fields carry that context themselves
//! (`BirthdayValidator` knows today's date, `IdentityCodeValidator` knows the
//! owner's birth date and sex), so every `validate` call is a pure function
//! of its inputs.
//!
//! `SubmissionValidator` checks a complete set of answers in one pass and
//! reports every failing field, for callers that do not prompt interactively.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::birth_date::BirthDate;
use crate::email::Email;
use crate::error::IdentityError;
use crate::field::Field;
use crate::identity_code::{self, IdentityCode};
use crate::name::Name;
use crate::phone::Phone;
use crate::record::{RecordBuilder, ValidatedRecord};
use crate::sex::Sex;

/// Validation and display for a single form field
pub trait FieldValidator {
    /// The typed value produced by successful validation
    type Output;

    /// Returns the field this validator handles
    fn field(&self) -> Field;

    /// Validates raw input
    ///
    /// # Errors
    ///
    /// Returns an `IdentityError` describing the first failing rule
    fn validate(&self, raw: &str) -> Result<Self::Output, IdentityError>;

    /// Formats a validated value for display
    fn format(&self, value: &Self::Output) -> String;
}

/// Validates email addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl FieldValidator for EmailValidator {
    type Output = Email;

    fn field(&self) -> Field {
        Field::Email
    }

    fn validate(&self, raw: &str) -> Result<Email, IdentityError> {
        Ok(Email::parse(raw)?)
    }

    fn format(&self, value: &Email) -> String {
        value.to_string()
    }
}

/// Validates full names
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl FieldValidator for NameValidator {
    type Output = Name;

    fn field(&self) -> Field {
        Field::Name
    }

    fn validate(&self, raw: &str) -> Result<Name, IdentityError> {
        Ok(Name::parse(raw)?)
    }

    fn format(&self, value: &Name) -> String {
        value.to_string()
    }
}

/// Validates Polish phone numbers
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl FieldValidator for PhoneValidator {
    type Output = Phone;

    fn field(&self) -> Field {
        Field::Phone
    }

    fn validate(&self, raw: &str) -> Result<Phone, IdentityError> {
        Ok(Phone::parse(raw)?)
    }

    fn format(&self, value: &Phone) -> String {
        value.formatted()
    }
}

/// Validates `YY/MM/DD` birthdays relative to a fixed date
#[derive(Debug, Clone, Copy)]
pub struct BirthdayValidator {
    today: NaiveDate,
}

impl BirthdayValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl FieldValidator for BirthdayValidator {
    type Output = BirthDate;

    fn field(&self) -> Field {
        Field::Birthday
    }

    fn validate(&self, raw: &str) -> Result<BirthDate, IdentityError> {
        Ok(BirthDate::parse(raw, self.today)?)
    }

    fn format(&self, value: &BirthDate) -> String {
        value.to_string()
    }
}

/// Validates the `M`/`F` gender answer
#[derive(Debug, Clone, Copy, Default)]
pub struct SexValidator;

impl FieldValidator for SexValidator {
    type Output = Sex;

    fn field(&self) -> Field {
        Field::Gender
    }

    fn validate(&self, raw: &str) -> Result<Sex, IdentityError> {
        Ok(Sex::parse(raw)?)
    }

    fn format(&self, value: &Sex) -> String {
        value.to_string()
    }
}

/// Validates identity codes against their owner's birth date and sex
#[derive(Debug, Clone, Copy)]
pub struct IdentityCodeValidator {
    birth_date: BirthDate,
    sex: Sex,
}

impl IdentityCodeValidator {
    pub fn new(birth_date: BirthDate, sex: Sex) -> Self {
        Self { birth_date, sex }
    }
}

impl FieldValidator for IdentityCodeValidator {
    type Output = IdentityCode;

    fn field(&self) -> Field {
        Field::Pesel
    }

    fn validate(&self, raw: &str) -> Result<IdentityCode, IdentityError> {
        Ok(identity_code::validate_for(raw, &self.birth_date, self.sex)?)
    }

    fn format(&self, value: &IdentityCode) -> String {
        value.to_string()
    }
}

/// Raw answers for every field of the form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    pub birthday: String,
    pub gender: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub pesel: String,
}

/// Result of validating a whole submission
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Failing fields with their first error, in collection order
    pub errors: Vec<(Field, IdentityError)>,
}

impl ValidationReport {
    /// Creates an empty report
    pub fn ok() -> Self {
        Self { errors: Vec::new() }
    }

    /// Whether no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records a failure
    pub fn add_error(&mut self, error: IdentityError) {
        self.errors.push((error.field(), error));
    }

    /// Returns the error recorded for `field`, if any
    pub fn error_for(&self, field: Field) -> Option<&IdentityError> {
        self.errors
            .iter()
            .find(|(failed, _)| *failed == field)
            .map(|(_, error)| error)
    }

    /// Returns the failing fields
    pub fn failed_fields(&self) -> Vec<Field> {
        self.errors.iter().map(|(field, _)| *field).collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validates complete submissions in one pass
///
/// Every field is checked so the report lists all problems at once. The
/// identity code is checked against as much context as is available:
/// fully when both birthday and gender are valid, against the declared sex
/// alone when only the gender is valid, and structurally otherwise.
pub struct SubmissionValidator;

impl SubmissionValidator {
    /// Validates a submission relative to `today`
    ///
    /// # Errors
    ///
    /// Returns a `ValidationReport` listing every failing field
    pub fn validate(
        submission: &Submission,
        today: NaiveDate,
    ) -> Result<ValidatedRecord, ValidationReport> {
        let mut report = ValidationReport::ok();
        let mut builder = RecordBuilder::new();

        let birth_date = collect(&mut report, BirthdayValidator::new(today).validate(&submission.birthday));
        let sex = collect(&mut report, SexValidator.validate(&submission.gender));
        if let Some(email) = collect(&mut report, EmailValidator.validate(submission.email.trim())) {
            builder = builder.email(email);
        }
        if let Some(name) = collect(&mut report, NameValidator.validate(submission.name.trim())) {
            builder = builder.name(name);
        }
        if let Some(phone) = collect(&mut report, PhoneValidator.validate(&submission.phone)) {
            builder = builder.phone(phone);
        }

        let pesel = submission.pesel.trim();
        match (birth_date, sex) {
            (Some(birth_date), Some(sex)) => {
                builder = builder.birth_date(birth_date).sex(sex);
                if let Some(code) =
                    collect(&mut report, IdentityCodeValidator::new(birth_date, sex).validate(pesel))
                {
                    builder = builder.identity_code(code);
                }
            }
            (None, Some(sex)) => {
                if let Err(error) = identity_code::check_sex(pesel, sex) {
                    report.add_error(error.into());
                }
            }
            (_, None) => {
                if let Err(error) = identity_code::decode_sex(pesel) {
                    report.add_error(error.into());
                }
            }
        }

        if !report.is_valid() {
            tracing::debug!(failed = ?report.failed_fields(), "submission rejected");
            return Err(report);
        }

        builder.build().map_err(|error| {
            tracing::error!(%error, "validated submission could not be assembled");
            report
        })
    }
}

fn collect<T>(report: &mut ValidationReport, result: Result<T, IdentityError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            report.add_error(error);
            None
        }
    }
}
