//! Fluent checks over a named string value.
//!
//! [`StringValidator`] holds a `(field, value)` pair and exposes chainable
//! checks: emptiness, byte-length bounds, equality, regex match/non-match,
//! and ASCII character classes. Every check returns the validator again on
//! success so further checks compose with `?`; the first violation aborts
//! the chain with a [`StringError`] naming the field.
//!
//! # Examples
//!
//! ```rust
//! use sill::StringValidator;
//!
//! let subject = StringValidator::new("username", "ada_lovelace");
//! let checked = subject.not_empty().and_then(|v| v.length_between(3, 20));
//! assert!(checked.is_ok());
//! ```
//!
//! ```rust
//! use sill::{string, StringError};
//!
//! let err = string("name", "ab").min_length(3).unwrap_err();
//! assert_eq!(
//!     err,
//!     StringError::TooShort {
//!         min: 3,
//!         actual: "ab".into(),
//!         field: "name".into(),
//!     }
//! );
//! ```

use regex::Regex;
use thiserror::Error;

/// Error raised by [`StringValidator`] checks.
///
/// Every variant carries the field under validation plus the context needed
/// to diagnose the failure without re-running the check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringError {
    /// The value was absent or the empty string.
    #[error("{field}: value must not be empty")]
    EmptyValue {
        /// Field under validation.
        field: String,
    },

    /// The value was shorter than the required minimum length.
    #[error("{field}: \"{actual}\" is shorter than {min} bytes")]
    TooShort {
        /// Required minimum length in bytes.
        min: usize,
        /// The offending value.
        actual: String,
        /// Field under validation.
        field: String,
    },

    /// The value was longer than the permitted maximum length.
    #[error("{field}: \"{actual}\" is longer than {max} bytes")]
    TooLong {
        /// Permitted maximum length in bytes.
        max: usize,
        /// The offending value.
        actual: String,
        /// Field under validation.
        field: String,
    },

    /// The value differed from the expected string.
    #[error("{field}: expected \"{expected}\", got \"{actual}\"")]
    NotEqual {
        /// The expected value.
        expected: String,
        /// The offending value.
        actual: String,
        /// Field under validation.
        field: String,
    },

    /// The value did not match the required pattern.
    #[error("{field}: \"{actual}\" does not match pattern `{pattern}`")]
    NotMatch {
        /// The pattern that found no match.
        pattern: String,
        /// The offending value.
        actual: String,
        /// Field under validation.
        field: String,
    },

    /// The value contained forbidden characters.
    #[error("{field}: \"{actual}\" contains invalid characters: {matched}")]
    InvalidCharacters {
        /// The offending substrings, space-joined in match order.
        matched: String,
        /// The offending value.
        actual: String,
        /// Field under validation.
        field: String,
    },
}

impl StringError {
    /// The field the failed check was attributed to.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::NotEqual { field, .. }
            | Self::NotMatch { field, .. }
            | Self::InvalidCharacters { field, .. } => field,
        }
    }
}

/// Immutable subject for string checks.
///
/// Lengths are measured in bytes (`str::len`), not code points. All checks
/// other than [`not_empty`](Self::not_empty) itself require a non-empty
/// value first and fail with [`StringError::EmptyValue`] otherwise.
#[derive(Debug, Clone, Copy)]
pub struct StringValidator<'v> {
    field: &'v str,
    value: Option<&'v str>,
}

impl<'v> StringValidator<'v> {
    /// Create a validator for a present value.
    pub fn new(field: &'v str, value: &'v str) -> Self {
        Self {
            field,
            value: Some(value),
        }
    }

    /// Create a validator for a possibly-absent value.
    ///
    /// An absent value fails every check with [`StringError::EmptyValue`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::StringValidator;
    ///
    /// let missing: Option<&str> = None;
    /// assert!(StringValidator::optional("nick", missing).not_empty().is_err());
    /// ```
    pub fn optional(field: &'v str, value: Option<&'v str>) -> Self {
        Self { field, value }
    }

    /// The field this subject is attributed to.
    pub fn field(&self) -> &str {
        self.field
    }

    /// The raw value under test, if present.
    pub fn value(&self) -> Option<&str> {
        self.value
    }

    fn require_value(&self) -> Result<&'v str, StringError> {
        match self.value {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(StringError::EmptyValue {
                field: self.field.into(),
            }),
        }
    }

    /// Check that the value is present and non-empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::string;
    ///
    /// assert!(string("name", "ada").not_empty().is_ok());
    /// assert!(string("name", "").not_empty().is_err());
    /// ```
    pub fn not_empty(&self) -> Result<&Self, StringError> {
        self.require_value()?;
        Ok(self)
    }

    /// Check that the value is at least `min` bytes long.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::string;
    ///
    /// assert!(string("name", "ada").min_length(3).is_ok());
    /// assert!(string("name", "ab").min_length(3).is_err());
    /// ```
    pub fn min_length(&self, min: usize) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        if value.len() < min {
            return Err(StringError::TooShort {
                min,
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    /// Check that the value is at most `max` bytes long.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::string;
    ///
    /// assert!(string("name", "ada").max_length(3).is_ok());
    /// assert!(string("name", "adah").max_length(3).is_err());
    /// ```
    pub fn max_length(&self, max: usize) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        if value.len() > max {
            return Err(StringError::TooLong {
                max,
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    /// Check that the value length falls within `min..=max` bytes.
    ///
    /// Runs [`min_length`](Self::min_length) then
    /// [`max_length`](Self::max_length); the first violation wins.
    pub fn length_between(&self, min: usize, max: usize) -> Result<&Self, StringError> {
        self.min_length(min)?;
        self.max_length(max)?;
        Ok(self)
    }

    /// Check that the value equals `expected` exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::string;
    ///
    /// assert!(string("mode", "append").equals("append").is_ok());
    /// assert!(string("mode", "truncate").equals("append").is_err());
    /// ```
    pub fn equals(&self, expected: &str) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        if value != expected {
            return Err(StringError::NotEqual {
                expected: expected.into(),
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    /// Check that `pattern` matches the value at least once.
    ///
    /// Patterns are pre-compiled [`Regex`] values, so the full dialect of
    /// the `regex` crate is available and an invalid pattern is caught at
    /// compile time rather than inside the chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use regex::Regex;
    /// use sill::string;
    ///
    /// let semver = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
    /// assert!(string("version", "1.2.3").matches(&semver).is_ok());
    /// assert!(string("version", "1.2").matches(&semver).is_err());
    /// ```
    pub fn matches(&self, pattern: &Regex) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        if !pattern.is_match(value) {
            return Err(StringError::NotMatch {
                pattern: pattern.as_str().into(),
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    /// Check that `pattern` never matches the value.
    ///
    /// On failure the error payload lists every match — the full match
    /// followed by its participating capture groups, per occurrence, in
    /// match order — joined with single spaces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use regex::Regex;
    /// use sill::{string, StringError};
    ///
    /// let control = Regex::new(r"[\x00-\x1f]").unwrap();
    /// assert!(string("title", "plain text").not_matches(&control).is_ok());
    ///
    /// let digits = Regex::new(r"\d+").unwrap();
    /// let err = string("word", "a1b22c").not_matches(&digits).unwrap_err();
    /// match err {
    ///     StringError::InvalidCharacters { matched, .. } => {
    ///         assert_eq!(matched, "1 22");
    ///     }
    ///     other => panic!("unexpected error: {other}"),
    /// }
    /// ```
    pub fn not_matches(&self, pattern: &Regex) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        let matched: Vec<&str> = pattern
            .captures_iter(value)
            .flat_map(|caps| {
                caps.iter()
                    .flatten()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
            })
            .collect();
        if !matched.is_empty() {
            return Err(StringError::InvalidCharacters {
                matched: matched.join(" "),
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    /// Check that the value consists of ASCII letters and digits only.
    ///
    /// Equivalent to matching `^[a-zA-Z0-9]+$`; accented and other
    /// non-ASCII letters fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::string;
    ///
    /// assert!(string("slug", "page42").alphanumeric().is_ok());
    /// assert!(string("slug", "page-42").alphanumeric().is_err());
    /// assert!(string("slug", "pagé42").alphanumeric().is_err());
    /// ```
    pub fn alphanumeric(&self) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StringError::InvalidCharacters {
                matched: "non-alphanumeric characters".into(),
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    /// Check that the value consists of ASCII letters only.
    ///
    /// Equivalent to matching `^[a-zA-Z]+$`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::string;
    ///
    /// assert!(string("word", "hello").alphabetic().is_ok());
    /// assert!(string("word", "hello7").alphabetic().is_err());
    /// ```
    pub fn alphabetic(&self) -> Result<&Self, StringError> {
        let value = self.require_value()?;
        if !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(StringError::InvalidCharacters {
                matched: "non-alphabetic characters".into(),
                actual: value.into(),
                field: self.field.into(),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_values_fail_every_check() {
        let absent = StringValidator::optional("f", None);
        let empty = StringValidator::new("f", "");

        for validator in [absent, empty] {
            assert_eq!(
                validator.not_empty().unwrap_err(),
                StringError::EmptyValue { field: "f".into() }
            );
            assert!(validator.min_length(0).is_err());
            assert!(validator.max_length(10).is_err());
            assert!(validator.equals("").is_err());
            assert!(validator.alphanumeric().is_err());
        }
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let v = StringValidator::new("f", "abc");
        assert!(v.min_length(3).is_ok());
        assert!(v.max_length(3).is_ok());
        assert!(v.length_between(3, 3).is_ok());
        assert!(v.min_length(4).is_err());
        assert!(v.max_length(2).is_err());
    }

    #[test]
    fn length_is_measured_in_bytes() {
        // "é" is two bytes in UTF-8
        let v = StringValidator::new("f", "é");
        assert!(v.min_length(2).is_ok());
        assert!(v.max_length(1).is_err());
    }

    #[test]
    fn length_between_reports_first_violation() {
        let err = StringValidator::new("f", "ab").length_between(3, 5).unwrap_err();
        assert!(matches!(err, StringError::TooShort { min: 3, .. }));

        let err = StringValidator::new("f", "abcdef").length_between(3, 5).unwrap_err();
        assert!(matches!(err, StringError::TooLong { max: 5, .. }));
    }

    #[test]
    fn equals_carries_both_sides() {
        let err = StringValidator::new("mode", "truncate").equals("append").unwrap_err();
        assert_eq!(
            err,
            StringError::NotEqual {
                expected: "append".into(),
                actual: "truncate".into(),
                field: "mode".into(),
            }
        );
    }

    #[test]
    fn matches_and_not_matches_are_complementary() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        let digits = StringValidator::new("f", "123");
        let letters = StringValidator::new("f", "abc");

        assert!(digits.matches(&pattern).is_ok());
        assert!(digits.not_matches(&pattern).is_err());
        assert!(letters.matches(&pattern).is_err());
        assert!(letters.not_matches(&pattern).is_ok());
    }

    #[test]
    fn not_matches_joins_matches_in_order() {
        let digits = Regex::new(r"\d+").unwrap();
        let err = StringValidator::new("f", "a1b22c333").not_matches(&digits).unwrap_err();
        match err {
            StringError::InvalidCharacters { matched, .. } => {
                assert_eq!(matched, "1 22 333");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_matches_includes_capture_groups() {
        let keyed = Regex::new(r"(\w+)=(\w+)").unwrap();
        let err = StringValidator::new("f", "a=1 b=2").not_matches(&keyed).unwrap_err();
        match err {
            StringError::InvalidCharacters { matched, .. } => {
                assert_eq!(matched, "a=1 a 1 b=2 b 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn character_classes_are_ascii_exact() {
        assert!(StringValidator::new("f", "abcXYZ09").alphanumeric().is_ok());
        assert!(StringValidator::new("f", "abc_09").alphanumeric().is_err());
        assert!(StringValidator::new("f", "café").alphanumeric().is_err());

        assert!(StringValidator::new("f", "abcXYZ").alphabetic().is_ok());
        assert!(StringValidator::new("f", "abc9").alphabetic().is_err());
    }

    #[test]
    fn chains_stop_at_first_violation() {
        let v = StringValidator::new("name", "ab");
        let result = v.not_empty().and_then(|v| v.min_length(3)).and_then(|v| v.alphabetic());
        assert_eq!(
            result.unwrap_err(),
            StringError::TooShort {
                min: 3,
                actual: "ab".into(),
                field: "name".into(),
            }
        );
    }

    #[test]
    fn errors_name_their_field() {
        let err = StringValidator::new("nick", "").not_empty().unwrap_err();
        assert_eq!(err.field(), "nick");
    }
}
