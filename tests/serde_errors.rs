//! Serde round-trips for the error taxonomy (requires `--features serde`).

#![cfg(feature = "serde")]

use sill::{string, Error, StringError};

#[test]
fn string_error_round_trips_through_json() {
    let err = string("name", "ab").min_length(3).unwrap_err();
    let json = serde_json::to_string(&err).unwrap();
    let back: StringError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn umbrella_error_serializes_with_family_tag() {
    let err: Error = StringError::EmptyValue { field: "name".into() }.into();
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("String"));
    let back: Error = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
