//! Property-based tests for the string validator boundaries.

use proptest::prelude::*;
use regex::Regex;
use sill::{string, StringError};

proptest! {
    #[test]
    fn prop_exact_length_bounds_always_pass(s in "[a-zA-Z0-9]{1,40}") {
        let len = s.len();
        prop_assert!(string("f", &s).min_length(len).is_ok());
        prop_assert!(string("f", &s).max_length(len).is_ok());
        prop_assert!(string("f", &s).length_between(len, len).is_ok());
    }

    #[test]
    fn prop_off_by_one_bounds_always_fail(s in "[a-zA-Z0-9]{1,40}") {
        let len = s.len();

        let err = string("f", &s).min_length(len + 1).unwrap_err();
        let is_too_short = matches!(err, StringError::TooShort { .. });
        prop_assert!(is_too_short);

        if len >= 1 {
            let err = string("f", &s).max_length(len - 1).unwrap_err();
            let is_too_long = matches!(err, StringError::TooLong { .. });
            prop_assert!(is_too_long);
        }
    }

    #[test]
    fn prop_matches_and_not_matches_are_complementary(s in "[a-z0-9]{1,20}") {
        let digits = Regex::new(r"\d").unwrap();
        let matches = string("f", &s).matches(&digits).is_ok();
        let not_matches = string("f", &s).not_matches(&digits).is_ok();
        prop_assert!(matches != not_matches);
    }

    #[test]
    fn prop_alphanumeric_accepts_its_own_alphabet(s in "[a-zA-Z0-9]{1,40}") {
        prop_assert!(string("f", &s).alphanumeric().is_ok());
    }

    #[test]
    fn prop_alphabetic_rejects_digits(s in "[a-z]{0,10}[0-9][a-z]{0,10}") {
        prop_assert!(string("f", &s).alphabetic().is_err());
    }

    #[test]
    fn prop_equals_is_reflexive(s in "[a-zA-Z0-9]{1,40}") {
        prop_assert!(string("f", &s).equals(&s).is_ok());
    }
}
