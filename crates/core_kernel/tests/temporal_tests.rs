//! Comprehensive unit tests for the Temporal module
//!
//! Tests cover the Clock implementations, whole-year age arithmetic,
//! and month lengths.

use chrono::{Datelike, Days, NaiveDate};
use core_kernel::{age_on, days_in_month, Clock, FixedClock, SystemClock, TemporalError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod clocks {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let clock = FixedClock::new(date(2026, 10, 16));
        assert_eq!(clock.today(), date(2026, 10, 16));
    }

    #[test]
    fn test_system_clock_is_a_plausible_date() {
        let today = SystemClock.today();
        assert!(today.year() >= 2024);
    }

    #[test]
    fn test_clock_through_trait_object() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(date(2000, 1, 1)));
        assert_eq!(clock.today(), date(2000, 1, 1));
    }
}

mod age {
    use super::*;

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(age_on(date(2026, 10, 16), date(2026, 10, 16)), Ok(0));
    }

    #[test]
    fn test_exact_anniversary_counts() {
        assert_eq!(age_on(date(1906, 10, 16), date(2026, 10, 16)), Ok(120));
    }

    #[test]
    fn test_day_after_anniversary_not_reached() {
        assert_eq!(age_on(date(1906, 10, 17), date(2026, 10, 16)), Ok(119));
    }

    #[test]
    fn test_future_birth_is_rejected() {
        assert!(matches!(
            age_on(date(2026, 10, 17), date(2026, 10, 16)),
            Err(TemporalError::AfterReference { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_age_never_decreases(offset in 0u64..40_000, extra in 0u64..1_000) {
            let birth = date(1900, 1, 1).checked_add_days(Days::new(offset)).unwrap();
            let reference = birth.checked_add_days(Days::new(extra)).unwrap();
            let later = reference.checked_add_days(Days::new(1)).unwrap();

            let now = age_on(birth, reference).unwrap();
            let next = age_on(birth, later).unwrap();
            prop_assert!(next == now || next == now + 1);
        }
    }
}

mod month_lengths {
    use super::*;

    #[test]
    fn test_thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2026, month), Ok(30));
        }
    }

    #[test]
    fn test_thirty_one_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2026, month), Ok(31));
        }
    }

    #[test]
    fn test_out_of_range_month() {
        assert_eq!(days_in_month(2026, 0), Err(TemporalError::MonthOutOfRange(0)));
        assert_eq!(days_in_month(2026, 13), Err(TemporalError::MonthOutOfRange(13)));
    }
}
