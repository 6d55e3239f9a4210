//! Tests for identity code validation
//!
//! Covers check precedence, century bands, the fixture codes, and the
//! checksum and encoding properties over generated input.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use domain_identity::identity_code::{
    check_sex, checksum_digit, decode_birth_date, decode_sex, encode_date, has_valid_checksum,
    parse_digits, validate_identity_code, weighted_sum,
};
use domain_identity::{
    BirthDate, FieldValidator, IdentityCode, IdentityCodeError, IdentityCodeValidator, Sex,
};
use test_utils::{
    assert_checksum_valid, assert_rejected_with, digit_string_strategy, identity_code_strategy,
    serial_strategy, sex_strategy, encodable_date_strategy, IdentityCodeFixtures,
    TemporalFixtures,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod fixtures {
    use super::*;

    #[test]
    fn test_all_fixture_codes_validate() {
        for known in IdentityCodeFixtures::all() {
            assert_checksum_valid(known.code);
            let result = validate_identity_code(known.code, known.birth_date(), known.sex);
            assert!(result.is_ok(), "{} rejected: {:?}", known.code, result);
        }
    }

    #[test]
    fn test_fixture_codes_validate_through_trait() {
        let today = TemporalFixtures::today();
        for known in IdentityCodeFixtures::all() {
            let birth_date = BirthDate::parse(known.birthday_input, today).unwrap();
            let validator = IdentityCodeValidator::new(birth_date, known.sex);
            let code = validator.validate(known.code).unwrap();
            assert_eq!(validator.format(&code), known.code);
        }
    }

    #[test]
    fn test_scenario_1944_male_fails_only_on_checksum() {
        let known = IdentityCodeFixtures::male_1944();
        let code = IdentityCodeFixtures::bad_checksum();

        // Date and sex digits agree with the reference data...
        assert_eq!(decode_birth_date(code), Ok(known.birth_date()));
        assert_eq!(decode_sex(code), Ok(Sex::Male));
        // ...but the weighted sum is 109
        assert!(!has_valid_checksum(&parse_digits(code).unwrap()));

        assert_eq!(
            validate_identity_code(code, known.birth_date(), Sex::Male),
            Err(IdentityCodeError::ChecksumFailed)
        );
    }
}

mod checksum {
    use super::*;

    #[test]
    fn test_known_weighted_sums() {
        let cases = [
            ("44051401358", 109),
            ("44051401359", 110),
            ("90123101469", 80),
            ("05210912352", 110),
            ("02270803624", 150),
        ];
        for (code, expected) in cases {
            assert_eq!(weighted_sum(&parse_digits(code).unwrap()), expected, "{}", code);
        }
    }

    #[test]
    fn test_validity_follows_known_sums() {
        assert!(!has_valid_checksum(&parse_digits("44051401358").unwrap()));
        assert!(has_valid_checksum(&parse_digits("44051401359").unwrap()));
        assert!(has_valid_checksum(&parse_digits("00000000000").unwrap()));
    }
}

mod precedence {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(
            validate_identity_code("", date(1944, 5, 14), Sex::Male),
            Err(IdentityCodeError::Empty)
        );
        assert_eq!(
            validate_identity_code("   ", date(1944, 5, 14), Sex::Male),
            Err(IdentityCodeError::Empty)
        );
    }

    #[test]
    fn test_length_before_charset() {
        assert_eq!(
            validate_identity_code("44O514", date(1944, 5, 14), Sex::Male),
            Err(IdentityCodeError::WrongLength(6))
        );
        assert_eq!(
            validate_identity_code("440514013590", date(1944, 5, 14), Sex::Male),
            Err(IdentityCodeError::WrongLength(12))
        );
    }

    #[test]
    fn test_charset() {
        assert_eq!(
            validate_identity_code("44O51401359", date(1944, 5, 14), Sex::Male),
            Err(IdentityCodeError::NonDigit)
        );
        assert_eq!(
            validate_identity_code("4405140135-", date(1944, 5, 14), Sex::Male),
            Err(IdentityCodeError::NonDigit)
        );
    }

    #[test]
    fn test_date_before_sex_and_checksum() {
        // Wrong day, wrong sex and wrong checksum: the date is reported
        assert_eq!(
            validate_identity_code("44051501348", date(1944, 5, 14), Sex::Female),
            Err(IdentityCodeError::DateMismatch)
        );
    }

    #[test]
    fn test_sex_before_checksum() {
        assert_eq!(
            validate_identity_code("44051401358", date(1944, 5, 14), Sex::Female),
            Err(IdentityCodeError::SexMismatch {
                encoded: Sex::Male,
                declared: Sex::Female,
            })
        );
    }

    #[test]
    fn test_sex_mismatch_message_names_both() {
        let error = validate_identity_code("44051401359", date(1944, 5, 14), Sex::Female)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "PESEL number indicates Male but you selected Female!"
        );
    }

    #[test]
    fn test_wrong_century_band_is_date_mismatch() {
        // Same digits as a 1944 birth, checked against 2044
        assert_eq!(
            validate_identity_code("44051401359", date(2044, 5, 14), Sex::Male),
            Err(IdentityCodeError::DateMismatch)
        );
    }

    #[test]
    fn test_reference_year_without_band() {
        assert_eq!(
            validate_identity_code("44051401359", date(1744, 5, 14), Sex::Male),
            Err(IdentityCodeError::MalformedPeselDate)
        );
    }

    #[test]
    fn test_trait_wraps_errors() {
        let birth_date = BirthDate::new(date(1944, 5, 14), TemporalFixtures::today()).unwrap();
        let validator = IdentityCodeValidator::new(birth_date, Sex::Male);
        assert_rejected_with(validator.validate("12345"), IdentityCodeError::WrongLength(5));
    }
}

mod century_bands {
    use super::*;

    fn month_digits(year: i32) -> String {
        let digits = encode_date(date(year, 1, 5)).unwrap();
        format!("{}{}", digits[2], digits[3])
    }

    #[test]
    fn test_month_encoding_per_century() {
        assert_eq!(month_digits(1905), "01");
        assert_eq!(month_digits(2005), "21");
        assert_eq!(month_digits(2105), "41");
        assert_eq!(month_digits(2205), "61");
        assert_eq!(month_digits(1805), "81");
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(month_digits(1899), "81");
        assert_eq!(month_digits(1900), "01");
        assert_eq!(month_digits(1999), "01");
        assert_eq!(month_digits(2000), "21");
        assert_eq!(month_digits(2299), "61");
    }

    #[test]
    fn test_december_in_each_band() {
        let encode_month = |year| {
            let digits = encode_date(date(year, 12, 1)).unwrap();
            digits[2] * 10 + digits[3]
        };
        assert_eq!(encode_month(1850), 92);
        assert_eq!(encode_month(1950), 12);
        assert_eq!(encode_month(2050), 32);
        assert_eq!(encode_month(2150), 52);
        assert_eq!(encode_month(2250), 72);
    }
}

mod sex_helpers {
    use super::*;

    #[test]
    fn test_decode_sex_without_birth_date() {
        assert_eq!(decode_sex("44051401359"), Ok(Sex::Male));
        assert_eq!(decode_sex("90123101469"), Ok(Sex::Female));
        assert_eq!(decode_sex("abc"), Err(IdentityCodeError::WrongLength(3)));
    }

    #[test]
    fn test_check_sex() {
        assert_eq!(check_sex("44051401359", Sex::Male), Ok(()));
        assert_eq!(
            check_sex("44051401359", Sex::Female),
            Err(IdentityCodeError::SexMismatch {
                encoded: Sex::Male,
                declared: Sex::Female,
            })
        );
    }
}

proptest! {
    #[test]
    fn prop_single_digit_change_breaks_checksum(
        (_, _, code) in identity_code_strategy(),
        position in 0usize..11,
        delta in 1u8..10,
    ) {
        let mut digits = parse_digits(code.as_str()).unwrap();
        prop_assert!(has_valid_checksum(&digits));

        digits[position] = (digits[position] + delta) % 10;
        prop_assert!(!has_valid_checksum(&digits));
    }

    #[test]
    fn prop_checksum_digit_completes_sum(code in digit_string_strategy()) {
        let digits = parse_digits(&code).unwrap();
        let mut first_ten = [0u8; 10];
        first_ten.copy_from_slice(&digits[..10]);

        let mut completed = digits;
        completed[10] = checksum_digit(&first_ten);
        prop_assert!(has_valid_checksum(&completed));
    }

    #[test]
    fn prop_composed_codes_validate((birth_date, sex, code) in identity_code_strategy()) {
        assert_checksum_valid(code.as_str());
        prop_assert_eq!(
            validate_identity_code(code.as_str(), birth_date, sex),
            Ok(code.clone())
        );
    }

    #[test]
    fn prop_decode_sex_round_trip((_, sex, code) in identity_code_strategy()) {
        prop_assert_eq!(decode_sex(code.as_str()), Ok(sex));
        prop_assert_eq!(code.sex(), sex);
    }

    #[test]
    fn prop_decode_birth_date_round_trip((birth_date, _, code) in identity_code_strategy()) {
        prop_assert_eq!(code.birth_date(), Ok(birth_date));
    }

    #[test]
    fn prop_accepted_codes_encode_reference_data(
        code in digit_string_strategy(),
        birth_date in encodable_date_strategy(),
        sex in sex_strategy(),
    ) {
        let digits = parse_digits(&code).unwrap();
        let expected_accept = digits[..6] == encode_date(birth_date).unwrap()
            && Sex::from_parity_digit(digits[9]) == sex
            && has_valid_checksum(&digits);

        let accepted = validate_identity_code(&code, birth_date, sex).is_ok();
        prop_assert_eq!(accepted, expected_accept);
    }

    #[test]
    fn prop_opposite_sex_rejected((birth_date, sex, code) in identity_code_strategy()) {
        let other = match sex {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        };
        let is_sex_mismatch = matches!(
            validate_identity_code(code.as_str(), birth_date, other),
            Err(IdentityCodeError::SexMismatch { .. })
        );
        prop_assert!(is_sex_mismatch);
    }

    #[test]
    fn prop_other_day_rejected(
        (birth_date, sex, code) in identity_code_strategy(),
        serial in serial_strategy(),
    ) {
        let other_day = if birth_date.day() == 1 {
            birth_date.succ_opt().unwrap()
        } else {
            birth_date.pred_opt().unwrap()
        };
        prop_assume!(other_day.year() >= 1800 && other_day.year() < 2300);

        prop_assert_eq!(
            validate_identity_code(code.as_str(), other_day, sex),
            Err(IdentityCodeError::DateMismatch)
        );

        let recomposed = IdentityCode::compose(other_day, sex, serial).unwrap();
        prop_assert!(validate_identity_code(recomposed.as_str(), other_day, sex).is_ok());
    }
}
