//! Test Data Builders
//!
//! Provides builder patterns for constructing test records with sensible
//! defaults. Tests set only what they care about; names and email addresses
//! are otherwise filled with realistic fake values.

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name as FakeName;
use fake::Fake;

use domain_identity::{
    BirthDate, Email, IdentityCode, Name, Phone, RecordBuilder, Sex, Submission, ValidatedRecord,
};

use crate::fixtures::{AnswerFixtures, TemporalFixtures};

/// Builder for valid test records
pub struct TestRecordBuilder {
    birth_date: NaiveDate,
    sex: Sex,
    serial: u16,
    email: Option<String>,
    name: Option<String>,
    phone: String,
    today: NaiveDate,
}

impl Default for TestRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            birth_date: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            sex: Sex::Female,
            serial: 123,
            email: None,
            name: None,
            phone: AnswerFixtures::phone().to_string(),
            today: TemporalFixtures::today(),
        }
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Sets the sex
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Sets the identity code serial (0-999)
    pub fn with_serial(mut self, serial: u16) -> Self {
        self.serial = serial;
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Returns the identity code matching the configured birth date and sex
    pub fn identity_code(&self) -> IdentityCode {
        IdentityCode::compose(self.birth_date, self.sex, self.serial)
            .expect("test birth date within a century band")
    }

    /// Builds the raw answers a user would type for this record
    ///
    /// The birthday answer uses a two-digit year, so it only reads back as
    /// the configured date for births in 1930-2029.
    pub fn submission(&self) -> Submission {
        Submission {
            birthday: self.birth_date.format("%y/%m/%d").to_string(),
            gender: self.sex.code().to_string(),
            email: self.email.clone().unwrap_or_else(|| SafeEmail().fake()),
            name: self.name.clone().unwrap_or_else(|| FakeName().fake()),
            phone: self.phone.clone(),
            pesel: self.identity_code().to_string(),
        }
    }

    /// Builds a validated record
    ///
    /// # Panics
    ///
    /// Panics if any configured value fails validation
    pub fn build(self) -> ValidatedRecord {
        let submission = self.submission();
        RecordBuilder::new()
            .birth_date(BirthDate::new(self.birth_date, self.today).expect("valid test birth date"))
            .sex(self.sex)
            .email(Email::parse(&submission.email).expect("valid test email"))
            .name(Name::parse(&submission.name).expect("valid test name"))
            .phone(Phone::parse(&submission.phone).expect("valid test phone"))
            .identity_code(self.identity_code())
            .build()
            .expect("all test record fields set")
    }
}
