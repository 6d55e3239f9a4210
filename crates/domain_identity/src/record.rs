//! Validated personal records
//!
//! A `ValidatedRecord` is assembled once, at the end, from values that have
//! each already passed validation. `RecordBuilder` accumulates those values
//! while they are being collected and doubles as the view of "what has been
//! collected so far" when a session is abandoned part-way.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_identity::{BirthDate, Email, IdentityCode, Name, Phone, RecordBuilder, Sex};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let birth_date = BirthDate::parse("44/05/14", today).unwrap();
//! let code = domain_identity::identity_code::validate_for("44051401359", &birth_date, Sex::Male).unwrap();
//!
//! let record = RecordBuilder::new()
//!     .birth_date(birth_date)
//!     .sex(Sex::Male)
//!     .email(Email::parse("jan@example.pl").unwrap())
//!     .name(Name::parse("Jan Kowalski").unwrap())
//!     .phone(Phone::parse("+48 123 456 789").unwrap())
//!     .identity_code(code)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(record.birth_date().to_string(), "1944-05-14");
//! ```

use serde::Serialize;

use crate::birth_date::BirthDate;
use crate::email::Email;
use crate::error::RecordError;
use crate::field::Field;
use crate::identity_code::{self, IdentityCode};
use crate::name::Name;
use crate::phone::Phone;
use crate::sex::Sex;

/// A complete set of validated personal information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRecord {
    birth_date: BirthDate,
    sex: Sex,
    email: Email,
    name: Name,
    phone: Phone,
    identity_code: IdentityCode,
}

impl ValidatedRecord {
    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn identity_code(&self) -> &IdentityCode {
        &self.identity_code
    }

    /// Returns the display value of a field
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Birthday => self.birth_date.to_string(),
            Field::Gender => self.sex.to_string(),
            Field::Email => self.email.to_string(),
            Field::Name => self.name.to_string(),
            Field::Phone => self.phone.formatted(),
            Field::Pesel => self.identity_code.to_string(),
        }
    }
}

/// Builder for `ValidatedRecord`
///
/// Accepts only already-validated values, so a built record is valid by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    birth_date: Option<BirthDate>,
    sex: Option<Sex>,
    email: Option<Email>,
    name: Option<Name>,
    phone: Option<Phone>,
    identity_code: Option<IdentityCode>,
}

impl RecordBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the birth date
    pub fn birth_date(mut self, birth_date: BirthDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Sets the sex
    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    /// Sets the email address
    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the name
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the phone number
    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Sets the identity code
    pub fn identity_code(mut self, identity_code: IdentityCode) -> Self {
        self.identity_code = Some(identity_code);
        self
    }

    /// Returns the display value of a field if it has been collected
    pub fn display_value(&self, field: Field) -> Option<String> {
        match field {
            Field::Birthday => self.birth_date.map(|value| value.to_string()),
            Field::Gender => self.sex.map(|value| value.to_string()),
            Field::Email => self.email.as_ref().map(ToString::to_string),
            Field::Name => self.name.as_ref().map(ToString::to_string),
            Field::Phone => self.phone.as_ref().map(Phone::formatted),
            Field::Pesel => self.identity_code.as_ref().map(ToString::to_string),
        }
    }

    /// Whether a value has been collected for `field`
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Birthday => self.birth_date.is_some(),
            Field::Gender => self.sex.is_some(),
            Field::Email => self.email.is_some(),
            Field::Name => self.name.is_some(),
            Field::Phone => self.phone.is_some(),
            Field::Pesel => self.identity_code.is_some(),
        }
    }

    /// Returns the fields still missing, in collection order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::COLLECTION_ORDER
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// Builds the record
    ///
    /// The identity code is checked once more against the birth date and
    /// sex it is stored with.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` naming the first absent field, or
    /// `RecordError::InconsistentIdentityCode` if the code encodes another
    /// birth date or sex
    pub fn build(self) -> Result<ValidatedRecord, RecordError> {
        let birth_date = self.birth_date.ok_or(RecordError::MissingField(Field::Birthday))?;
        let sex = self.sex.ok_or(RecordError::MissingField(Field::Gender))?;
        let email = self.email.ok_or(RecordError::MissingField(Field::Email))?;
        let name = self.name.ok_or(RecordError::MissingField(Field::Name))?;
        let phone = self.phone.ok_or(RecordError::MissingField(Field::Phone))?;
        let identity_code = self
            .identity_code
            .ok_or(RecordError::MissingField(Field::Pesel))?;

        identity_code::validate_for(identity_code.as_str(), &birth_date, sex)
            .map_err(RecordError::InconsistentIdentityCode)?;

        Ok(ValidatedRecord {
            birth_date,
            sex,
            email,
            name,
            phone,
            identity_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentityCodeError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_empty_builder_reports_birthday_first() {
        assert_eq!(
            RecordBuilder::new().build(),
            Err(RecordError::MissingField(Field::Birthday))
        );
    }

    #[test]
    fn test_partial_builder_tracks_missing_fields() {
        let builder = RecordBuilder::new()
            .birth_date(BirthDate::parse("90/12/31", today()).unwrap())
            .sex(Sex::Female);

        assert!(builder.has(Field::Birthday));
        assert_eq!(builder.display_value(Field::Birthday).as_deref(), Some("1990-12-31"));
        assert_eq!(builder.display_value(Field::Email), None);
        assert_eq!(
            builder.missing_fields(),
            vec![Field::Email, Field::Name, Field::Phone, Field::Pesel]
        );
        assert_eq!(builder.build(), Err(RecordError::MissingField(Field::Email)));
    }

    fn complete_except_code(birth_date: &str, sex: Sex) -> RecordBuilder {
        RecordBuilder::new()
            .birth_date(BirthDate::parse(birth_date, today()).unwrap())
            .sex(sex)
            .email(Email::parse("anna@example.pl").unwrap())
            .name(Name::parse("Anna Nowak").unwrap())
            .phone(Phone::parse("+48 600 100 200").unwrap())
    }

    #[test]
    fn test_code_for_another_person_rejected() {
        let other = IdentityCode::compose(
            NaiveDate::from_ymd_opt(1944, 5, 14).unwrap(),
            Sex::Male,
            13,
        )
        .unwrap();

        let result = complete_except_code("90/12/31", Sex::Female)
            .identity_code(other)
            .build();
        assert_eq!(
            result,
            Err(RecordError::InconsistentIdentityCode(IdentityCodeError::DateMismatch))
        );
    }

    #[test]
    fn test_code_with_other_sex_rejected() {
        let code = IdentityCode::compose(
            NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
            Sex::Male,
            146,
        )
        .unwrap();

        let result = complete_except_code("90/12/31", Sex::Female)
            .identity_code(code)
            .build();
        assert_eq!(
            result,
            Err(RecordError::InconsistentIdentityCode(IdentityCodeError::SexMismatch {
                encoded: Sex::Male,
                declared: Sex::Female,
            }))
        );
    }

    #[test]
    fn test_matching_code_builds() {
        let code = IdentityCode::compose(
            NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
            Sex::Female,
            146,
        )
        .unwrap();

        let record = complete_except_code("90/12/31", Sex::Female)
            .identity_code(code.clone())
            .build()
            .unwrap();
        assert_eq!(record.identity_code(), &code);
    }
}
