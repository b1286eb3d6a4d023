//! Strict date-string validation against a strftime format.
//!
//! [`DateValidator`] parses its value with `chrono` and additionally
//! requires that re-formatting the parsed result reproduces the input
//! byte-for-byte. Parsing alone is not enough: a lenient reading of
//! `"2023-1-5"` against `%Y-%m-%d` yields a perfectly good date that was
//! still not written in the declared format, and the round-trip is what
//! rejects it.
//!
//! # Examples
//!
//! ```rust
//! use sill::date;
//!
//! assert!(date("since", "2023-02-28").must_be_valid_date().is_ok());
//! assert!(date("since", "2023-02-30").must_be_valid_date().is_err());
//! assert!(date("since", "2023-1-5").must_be_valid_date().is_err());
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;
use thiserror::Error;

/// Calendar-date format used by [`DateValidator::new`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-and-time format used by [`DateValidator::date_time`].
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error raised by [`DateValidator`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateError {
    /// The value was absent, empty, or whitespace-only.
    #[error("{field}: value must not be empty")]
    EmptyValue {
        /// Field under validation.
        field: String,
    },

    /// The value did not round-trip through the expected format.
    #[error("{field}: \"{value}\" is not a valid date in format `{format}`")]
    InvalidDate {
        /// Field under validation.
        field: String,
        /// The offending value.
        value: String,
        /// The format the value was checked against.
        format: String,
    },
}

impl DateError {
    /// The field the failed check was attributed to.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field } | Self::InvalidDate { field, .. } => field,
        }
    }
}

/// Immutable subject for date checks.
#[derive(Debug, Clone, Copy)]
pub struct DateValidator<'v> {
    field: &'v str,
    value: Option<&'v str>,
    format: &'v str,
}

impl<'v> DateValidator<'v> {
    /// Create a validator expecting the [`DATE_FORMAT`] calendar format.
    pub fn new(field: &'v str, value: &'v str) -> Self {
        Self::with_format(field, value, DATE_FORMAT)
    }

    /// Create a validator expecting the [`DATE_TIME_FORMAT`] format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::DateValidator;
    ///
    /// let v = DateValidator::date_time("started_at", "2024-06-01 09:30:00");
    /// assert!(v.must_be_valid_date().is_ok());
    /// ```
    pub fn date_time(field: &'v str, value: &'v str) -> Self {
        Self::with_format(field, value, DATE_TIME_FORMAT)
    }

    /// Create a validator expecting an arbitrary strftime format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::DateValidator;
    ///
    /// let v = DateValidator::with_format("day", "01/06/2024", "%d/%m/%Y");
    /// assert!(v.must_be_valid_date().is_ok());
    /// ```
    pub fn with_format(field: &'v str, value: &'v str, format: &'v str) -> Self {
        Self {
            field,
            value: Some(value),
            format,
        }
    }

    /// Create a validator for a possibly-absent value with the default
    /// [`DATE_FORMAT`].
    pub fn optional(field: &'v str, value: Option<&'v str>) -> Self {
        Self {
            field,
            value,
            format: DATE_FORMAT,
        }
    }

    /// The field this subject is attributed to.
    pub fn field(&self) -> &str {
        self.field
    }

    /// The format the value is checked against.
    pub fn format(&self) -> &str {
        self.format
    }

    fn require_value(&self) -> Result<&'v str, DateError> {
        match self.value {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(DateError::EmptyValue {
                field: self.field.into(),
            }),
        }
    }

    /// Check that the value parses with the format and round-trips exactly.
    ///
    /// Fails with [`DateError::EmptyValue`] on an absent or whitespace-only
    /// value, and with [`DateError::InvalidDate`] when parsing fails or the
    /// parsed result re-formats to anything other than the original input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::{date, DateError};
    ///
    /// let err = date("since", "2023-02-30").must_be_valid_date().unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     DateError::InvalidDate {
    ///         field: "since".into(),
    ///         value: "2023-02-30".into(),
    ///         format: "%Y-%m-%d".into(),
    ///     }
    /// );
    /// ```
    pub fn must_be_valid_date(&self) -> Result<&Self, DateError> {
        let value = self.require_value()?;
        if !round_trips(value, self.format) {
            return Err(DateError::InvalidDate {
                field: self.field.into(),
                value: value.into(),
                format: self.format.into(),
            });
        }
        Ok(self)
    }
}

/// Parse `value` with `format` and require the re-formatted result to equal
/// the input exactly.
///
/// The format may describe a datetime, a date, or a time; the
/// interpretations are tried in that order, so `%Y-%m-%d %H:%M:%S` resolves
/// before the date-only reading gets a chance to discard its time fields.
fn round_trips(value: &str, format: &str) -> bool {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
        return reformat(parsed.format(format)).as_deref() == Some(value);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
        return reformat(parsed.format(format)).as_deref() == Some(value);
    }
    if let Ok(parsed) = NaiveTime::parse_from_str(value, format) {
        return reformat(parsed.format(format)).as_deref() == Some(value);
    }
    false
}

/// Render a chrono `DelayedFormat`, treating an unrenderable format (for
/// example a time specifier applied to a bare date) as a failed round-trip
/// rather than a panic.
fn reformat(delayed: chrono::format::DelayedFormat<chrono::format::StrftimeItems<'_>>) -> Option<String> {
    let mut out = String::new();
    write!(out, "{delayed}").ok()?;
    Some(out)
}
