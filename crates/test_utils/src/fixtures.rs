//! Pre-built Test Fixtures
//!
//! Provides ready-to-use, predictable test data. Every date-sensitive
//! fixture is relative to `TemporalFixtures::today()` so tests never depend
//! on the machine clock.

use chrono::NaiveDate;
use core_kernel::FixedClock;
use domain_identity::{Sex, Submission};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The pinned "today" used across the test suite (Oct 16, 2026)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    /// A clock frozen at `today()`
    pub fn clock() -> FixedClock {
        FixedClock::new(Self::today())
    }

    /// Birth date of someone turning 18 exactly on `today()`
    pub fn eighteenth_birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2008, 10, 16).unwrap()
    }
}

/// A valid identity code together with the data it encodes
#[derive(Debug, Clone, Copy)]
pub struct KnownCode {
    pub code: &'static str,
    pub birth_date: (i32, u32, u32),
    pub birthday_input: &'static str,
    pub sex: Sex,
}

impl KnownCode {
    pub fn birth_date(&self) -> NaiveDate {
        let (year, month, day) = self.birth_date;
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn gender_input(&self) -> &'static str {
        match self.sex {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

/// Fixture for identity codes
pub struct IdentityCodeFixtures;

impl IdentityCodeFixtures {
    /// Male born May 14, 1944
    pub fn male_1944() -> KnownCode {
        KnownCode {
            code: "44051401359",
            birth_date: (1944, 5, 14),
            birthday_input: "44/05/14",
            sex: Sex::Male,
        }
    }

    /// Female born Dec 31, 1990
    pub fn female_1990() -> KnownCode {
        KnownCode {
            code: "90123101469",
            birth_date: (1990, 12, 31),
            birthday_input: "90/12/31",
            sex: Sex::Female,
        }
    }

    /// Male born Jan 9, 2005 (month encoded with the +20 band)
    pub fn male_2005() -> KnownCode {
        KnownCode {
            code: "05210912352",
            birth_date: (2005, 1, 9),
            birthday_input: "05/01/09",
            sex: Sex::Male,
        }
    }

    /// Female born Jul 8, 2002
    pub fn female_2002() -> KnownCode {
        KnownCode {
            code: "02270803624",
            birth_date: (2002, 7, 8),
            birthday_input: "02/07/08",
            sex: Sex::Female,
        }
    }

    /// All known-good codes
    pub fn all() -> Vec<KnownCode> {
        vec![
            Self::male_1944(),
            Self::female_1990(),
            Self::male_2005(),
            Self::female_2002(),
        ]
    }

    /// Matches `male_1944` on date and sex but has a wrong control digit
    pub fn bad_checksum() -> &'static str {
        "44051401358"
    }
}

/// Fixture for raw form answers
pub struct AnswerFixtures;

impl AnswerFixtures {
    pub fn email() -> &'static str {
        "jan.kowalski@example.pl"
    }

    pub fn name() -> &'static str {
        "Jan Kowalski"
    }

    pub fn phone() -> &'static str {
        "+48 123 456 789"
    }

    /// A complete valid submission for `IdentityCodeFixtures::male_1944`
    pub fn submission() -> Submission {
        Self::submission_for(IdentityCodeFixtures::male_1944())
    }

    /// A complete valid submission for a known code
    pub fn submission_for(known: KnownCode) -> Submission {
        Submission {
            birthday: known.birthday_input.to_string(),
            gender: known.gender_input().to_string(),
            email: Self::email().to_string(),
            name: Self::name().to_string(),
            phone: Self::phone().to_string(),
            pesel: known.code.to_string(),
        }
    }

    /// Answers to the interactive prompts, in prompt order
    pub fn session_lines(known: KnownCode) -> Vec<String> {
        let submission = Self::submission_for(known);
        vec![
            submission.birthday,
            submission.gender,
            submission.email,
            submission.name,
            submission.phone,
            submission.pesel,
        ]
    }
}
