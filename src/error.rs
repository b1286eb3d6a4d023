//! Crate-wide error type for chains that mix validator families.
//!
//! Each family raises its own error (`StringError`, `DateError`,
//! `FileError`, `DirectoryError`). A function that validates several inputs
//! of different kinds can return [`Error`] and let `?` convert:
//!
//! ```rust
//! use sill::{date, string, Error};
//!
//! fn check_report(name: &str, day: &str) -> Result<(), Error> {
//!     string("name", name).not_empty()?.max_length(64)?;
//!     date("day", day).must_be_valid_date()?;
//!     Ok(())
//! }
//!
//! let err = check_report("quarterly", "2024-13-01").unwrap_err();
//! assert_eq!(err.field(), "day");
//! ```

use thiserror::Error as ThisError;

use crate::date::DateError;
use crate::directory::DirectoryError;
use crate::file::FileError;
use crate::string::StringError;

/// Any validation failure, from any family.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// A string check failed.
    #[error(transparent)]
    String(#[from] StringError),
    /// A date check failed.
    #[error(transparent)]
    Date(#[from] DateError),
    /// A file check failed.
    #[error(transparent)]
    File(#[from] FileError),
    /// A directory check failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl Error {
    /// The field the failed check was attributed to.
    pub fn field(&self) -> &str {
        match self {
            Self::String(err) => err.field(),
            Self::Date(err) => err.field(),
            Self::File(err) => err.field(),
            Self::Directory(err) => err.field(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_preserve_the_field() {
        let err: Error = StringError::EmptyValue { field: "a".into() }.into();
        assert_eq!(err.field(), "a");

        let err: Error = DateError::EmptyValue { field: "b".into() }.into();
        assert_eq!(err.field(), "b");

        let err: Error = FileError::NotFound {
            field: "c".into(),
            path: "/x".into(),
        }
        .into();
        assert_eq!(err.field(), "c");

        let err: Error = DirectoryError::EmptyValue { field: "d".into() }.into();
        assert_eq!(err.field(), "d");
    }

    #[test]
    fn display_is_transparent() {
        let err: Error = StringError::EmptyValue { field: "a".into() }.into();
        assert_eq!(err.to_string(), "a: value must not be empty");
    }
}
