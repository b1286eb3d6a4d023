//! Integration tests for strict date round-trip validation.

use sill::{date, DateError, DateValidator, DATE_FORMAT, DATE_TIME_FORMAT};

#[test]
fn format_constants_match_their_constructors() {
    assert_eq!(DateValidator::new("d", "2024-01-01").format(), DATE_FORMAT);
    assert_eq!(
        DateValidator::date_time("d", "2024-01-01 00:00:00").format(),
        DATE_TIME_FORMAT
    );
}

#[test]
fn leap_day_is_valid_only_in_leap_years() {
    assert!(date("d", "2024-02-29").must_be_valid_date().is_ok());
    assert!(date("d", "2023-02-29").must_be_valid_date().is_err());
}

#[test]
fn parseable_but_not_round_tripping_values_fail() {
    // A lenient parser would accept all of these; none re-format to the
    // original input.
    for value in ["2023-1-05", "2023-01-5", "2023-1-5"] {
        let err = date("d", value).must_be_valid_date().unwrap_err();
        assert!(
            matches!(err, DateError::InvalidDate { .. }),
            "{value} should fail the round-trip"
        );
    }
}

#[test]
fn leading_and_trailing_garbage_fails() {
    for value in ["2023-01-01x", " 2023-01-01", "x2023-01-01"] {
        assert!(
            date("d", value).must_be_valid_date().is_err(),
            "{value} should fail"
        );
    }
}

#[test]
fn datetime_values_need_the_datetime_constructor() {
    let value = "2024-06-01 09:30:00";
    assert!(DateValidator::date_time("t", value).must_be_valid_date().is_ok());
    assert!(date("t", value).must_be_valid_date().is_err());
}

#[test]
fn whitespace_only_is_empty_not_invalid() {
    let err = date("d", "  ").must_be_valid_date().unwrap_err();
    assert_eq!(err, DateError::EmptyValue { field: "d".into() });
}

#[test]
fn error_display_names_field_value_and_format() {
    let err = date("since", "2023-02-30").must_be_valid_date().unwrap_err();
    assert_eq!(
        err.to_string(),
        "since: \"2023-02-30\" is not a valid date in format `%Y-%m-%d`"
    );
}
