//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use domain_identity::{IdentityCode, Sex};

use crate::fixtures::TemporalFixtures;

/// Strategy for generating either sex
pub fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

/// Strategy for generating any date inside the encodable century bands
/// (1800-01-01 through 2299-12-31)
pub fn encodable_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2299, 12, 31).unwrap();
    let span = (end - start).num_days() as u64;
    (0..=span).prop_map(move |offset| start.checked_add_days(Days::new(offset)).unwrap())
}

/// Strategy for generating birth dates of people aged 18 to 119 on the
/// fixture "today"
pub fn adult_birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let youngest = TemporalFixtures::eighteenth_birthday();
    let oldest = NaiveDate::from_ymd_opt(1907, 10, 16).unwrap();
    let span = (youngest - oldest).num_days() as u64;
    (0..=span).prop_map(move |offset| oldest.checked_add_days(Days::new(offset)).unwrap())
}

/// Strategy for generating identity code serial numbers
pub fn serial_strategy() -> impl Strategy<Value = u16> {
    0u16..1000u16
}

/// Strategy for generating a valid identity code with the data it encodes
pub fn identity_code_strategy() -> impl Strategy<Value = (NaiveDate, Sex, IdentityCode)> {
    (encodable_date_strategy(), sex_strategy(), serial_strategy()).prop_map(
        |(birth_date, sex, serial)| {
            let code = IdentityCode::compose(birth_date, sex, serial)
                .expect("generated date lies inside a century band");
            (birth_date, sex, code)
        },
    )
}

/// Strategy for generating arbitrary 11-digit strings
pub fn digit_string_strategy() -> impl Strategy<Value = String> {
    "[0-9]{11}"
}

/// Strategy for generating nine national phone digits
pub fn national_phone_digits_strategy() -> impl Strategy<Value = String> {
    "[0-9]{9}"
}
