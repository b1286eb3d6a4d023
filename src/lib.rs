//! # Sill
//!
//! > *A sill is the piece of the frame every input crosses on its way in.*
//!
//! A Rust library for fluent precondition validation: check named inputs
//! (strings, dates, file paths, directory paths) at the boundary, before the
//! real work starts, and fail fast with a field-aware, typed error.
//!
//! ## Philosophy
//!
//! Every validator is an immutable **subject** — a `(field, value)` pair,
//! plus a format for dates — exposing a chain of check methods. Each check
//! either returns the subject again, so further checks can be chained with
//! `?`, or fails with an error that carries the field name, the offending
//! value, and the limit/pattern/format that was violated. The first failed
//! check aborts the chain; nothing is accumulated, nothing is retried.
//!
//! ## Quick Example
//!
//! ```rust
//! use sill::{string, file};
//!
//! fn check_upload(name: &str, path: &str) -> Result<(), sill::Error> {
//!     string("name", name).not_empty()?.length_between(1, 64)?;
//!     file("upload", path).must_have_extension()?;
//!     Ok(())
//! }
//!
//! assert!(check_upload("report", "report.pdf").is_ok());
//!
//! let err = check_upload("", "report.pdf").unwrap_err();
//! assert_eq!(err.field(), "name");
//! ```
//!
//! Each family has its own error type (`StringError`, `DateError`,
//! `FileError`, `DirectoryError`); the crate-level [`Error`] wraps all four
//! for chains that mix families.
//!
//! Checks re-evaluate their own preconditions on every call (`min_length`
//! re-checks non-emptiness, `must_be_readable` re-checks existence). Each
//! call asserts against live state at call time; time-of-check races with
//! time-of-use are out of scope.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod access;

pub mod date;
pub mod directory;
pub mod error;
pub mod file;
pub mod string;

// Re-exports
pub use date::{DateError, DateValidator, DATE_FORMAT, DATE_TIME_FORMAT};
pub use directory::{DirectoryError, DirectoryValidator};
pub use error::Error;
pub use file::{FileError, FileValidator};
pub use string::{StringError, StringValidator};

/// Start a string validation chain.
///
/// Shorthand for [`StringValidator::new`]. Use
/// [`StringValidator::optional`] when the value may be absent.
///
/// # Example
///
/// ```rust
/// use sill::string;
///
/// assert!(string("name", "ada").not_empty().is_ok());
/// assert!(string("name", "").not_empty().is_err());
/// ```
pub fn string<'v>(field: &'v str, value: &'v str) -> StringValidator<'v> {
    StringValidator::new(field, value)
}

/// Start a date validation chain with the default `%Y-%m-%d` format.
///
/// Shorthand for [`DateValidator::new`]. Use [`DateValidator::with_format`]
/// for other formats and [`DateValidator::date_time`] for
/// `%Y-%m-%d %H:%M:%S`.
///
/// # Example
///
/// ```rust
/// use sill::date;
///
/// assert!(date("since", "2024-02-29").must_be_valid_date().is_ok());
/// assert!(date("since", "2024-02-30").must_be_valid_date().is_err());
/// ```
pub fn date<'v>(field: &'v str, value: &'v str) -> DateValidator<'v> {
    DateValidator::new(field, value)
}

/// Start a file validation chain.
///
/// Shorthand for [`FileValidator::new`].
///
/// # Example
///
/// ```rust
/// use sill::file;
///
/// assert!(file("upload", "photo.jpg").must_have_extension().is_ok());
/// assert!(file("upload", "photo").must_have_extension().is_err());
/// ```
pub fn file<'v>(field: &'v str, value: &'v str) -> FileValidator<'v> {
    FileValidator::new(field, value)
}

/// Start a directory validation chain.
///
/// Shorthand for [`DirectoryValidator::new`]. Use
/// [`DirectoryValidator::optional`] when the value may be absent.
///
/// # Example
///
/// ```rust,no_run
/// use sill::directory;
///
/// directory("out", "/tmp/build/artifacts").ensure_exists().unwrap();
/// ```
pub fn directory<'v>(field: &'v str, value: &'v str) -> DirectoryValidator<'v> {
    DirectoryValidator::new(field, value)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::date::{DateError, DateValidator, DATE_FORMAT, DATE_TIME_FORMAT};
    pub use crate::directory::{DirectoryError, DirectoryValidator};
    pub use crate::error::Error;
    pub use crate::file::{FileError, FileValidator};
    pub use crate::string::{StringError, StringValidator};
    pub use crate::{date, directory, file, string};
}
