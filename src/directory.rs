//! Fluent checks over a named directory path.
//!
//! [`DirectoryValidator`] asserts properties of a directory: existence
//! (either way), readability/writability, emptiness, and two policy
//! operations — [`ensure_exists`](DirectoryValidator::ensure_exists), the
//! one check in the crate that mutates the environment (it creates the
//! directory, parents first, when absent), and
//! [`ensure_deletable`](DirectoryValidator::ensure_deletable), which asserts
//! that a deletion under the given policy would be allowed without deleting
//! anything.
//!
//! Directory listings are scanned through [`std::fs::read_dir`], whose
//! handle is released when the iterator drops, on every exit path.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sill::directory;
//!
//! fn prepare_output(path: &str) -> Result<(), sill::DirectoryError> {
//!     directory("out", path).ensure_exists()?.must_be_writable()?;
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::access;

/// Error raised by [`DirectoryValidator`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectoryError {
    /// The value was absent, empty, or whitespace-only.
    #[error("{field}: value must not be empty")]
    EmptyValue {
        /// Field under validation.
        field: String,
    },

    /// The path is not an existing directory.
    #[error("{field}: directory \"{path}\" does not exist")]
    NotExist {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The directory exists although it must not.
    #[error("{field}: directory \"{path}\" already exists")]
    AlreadyExists {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The directory exists but cannot be read.
    #[error("{field}: directory \"{path}\" is not readable")]
    NotReadable {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The directory exists but cannot be written.
    #[error("{field}: directory \"{path}\" is not writable")]
    NotWritable {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The directory contains entries although it must be empty.
    #[error("{field}: directory \"{path}\" is not empty")]
    NotEmpty {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The directory listing could not be opened.
    #[error("{field}: directory \"{path}\" cannot be scanned")]
    CannotScan {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The directory (or its parent) could not be created.
    #[error("{field}: directory \"{path}\" cannot be created")]
    CannotCreate {
        /// Field under validation.
        field: String,
        /// The path that failed to be created: the parent or the target.
        path: String,
    },
}

impl DirectoryError {
    /// The field the failed check was attributed to.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field }
            | Self::NotExist { field, .. }
            | Self::AlreadyExists { field, .. }
            | Self::NotReadable { field, .. }
            | Self::NotWritable { field, .. }
            | Self::NotEmpty { field, .. }
            | Self::CannotScan { field, .. }
            | Self::CannotCreate { field, .. } => field,
        }
    }
}

/// Immutable subject for directory checks.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryValidator<'v> {
    field: &'v str,
    value: Option<&'v str>,
}

impl<'v> DirectoryValidator<'v> {
    /// Create a validator for a directory path.
    pub fn new(field: &'v str, value: &'v str) -> Self {
        Self {
            field,
            value: Some(value),
        }
    }

    /// Create a validator for a possibly-absent path.
    ///
    /// An absent, empty, or whitespace-only value fails every check with
    /// [`DirectoryError::EmptyValue`].
    pub fn optional(field: &'v str, value: Option<&'v str>) -> Self {
        Self { field, value }
    }

    /// The field this subject is attributed to.
    pub fn field(&self) -> &str {
        self.field
    }

    /// The path under test, if present.
    pub fn value(&self) -> Option<&str> {
        self.value
    }

    fn require_value(&self) -> Result<&'v str, DirectoryError> {
        match self.value {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(DirectoryError::EmptyValue {
                field: self.field.into(),
            }),
        }
    }

    /// Non-empty guard plus existence check, returning the path for
    /// follow-up work.
    fn require_dir(&self) -> Result<&'v str, DirectoryError> {
        let value = self.require_value()?;
        if !Path::new(value).is_dir() {
            return Err(DirectoryError::NotExist {
                field: self.field.into(),
                path: value.into(),
            });
        }
        Ok(value)
    }

    /// Check that the path is an existing directory.
    pub fn must_exist(&self) -> Result<&Self, DirectoryError> {
        self.require_dir()?;
        Ok(self)
    }

    /// Check that no directory exists at the path.
    pub fn must_not_exist(&self) -> Result<&Self, DirectoryError> {
        let value = self.require_value()?;
        if Path::new(value).is_dir() {
            return Err(DirectoryError::AlreadyExists {
                field: self.field.into(),
                path: value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the directory exists and is readable.
    pub fn must_be_readable(&self) -> Result<&Self, DirectoryError> {
        let value = self.require_dir()?;
        if !access::readable(Path::new(value)) {
            return Err(DirectoryError::NotReadable {
                field: self.field.into(),
                path: value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the directory exists and is writable.
    pub fn must_be_writable(&self) -> Result<&Self, DirectoryError> {
        let value = self.require_dir()?;
        if !access::writable(Path::new(value)) {
            return Err(DirectoryError::NotWritable {
                field: self.field.into(),
                path: value.into(),
            });
        }
        Ok(self)
    }

    /// Whether the directory contains at least one entry.
    ///
    /// A query, not a chainable check: the directory must exist, the scan
    /// must open ([`DirectoryError::CannotScan`] otherwise), and the answer
    /// comes from the first entry of the listing. Exactly one of
    /// `is_not_empty() == Ok(true)` and `must_be_empty().is_ok()` holds for
    /// any existing directory.
    pub fn is_not_empty(&self) -> Result<bool, DirectoryError> {
        let value = self.require_dir()?;
        let mut entries = self.scan(value)?;
        Ok(entries.next().is_some())
    }

    /// Check that the directory exists and contains no entries.
    pub fn must_be_empty(&self) -> Result<&Self, DirectoryError> {
        let value = self.require_dir()?;
        let mut entries = self.scan(value)?;
        if entries.next().is_some() {
            return Err(DirectoryError::NotEmpty {
                field: self.field.into(),
                path: value.into(),
            });
        }
        Ok(self)
    }

    fn scan(&self, value: &str) -> Result<fs::ReadDir, DirectoryError> {
        fs::read_dir(value).map_err(|_| DirectoryError::CannotScan {
            field: self.field.into(),
            path: value.into(),
        })
    }

    /// Create the directory if it does not exist; succeed if it does.
    ///
    /// When the directory is absent its parent is ensured first (created
    /// recursively with mode `0o755` on unix), failing with
    /// [`DirectoryError::CannotCreate`] naming the parent; then the target
    /// itself is created, failing with `CannotCreate` naming the target.
    /// Calling this on an existing directory is a no-op success, so
    /// concurrent callers racing to create the same path both succeed.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sill::directory;
    ///
    /// // Creates /var/cache/app and any missing parents.
    /// directory("cache", "/var/cache/app").ensure_exists().unwrap();
    /// ```
    pub fn ensure_exists(&self) -> Result<&Self, DirectoryError> {
        let value = self.require_value()?;
        let path = Path::new(value);
        if !path.is_dir() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.is_dir() && create_dir_tree(parent).is_err() {
                    return Err(DirectoryError::CannotCreate {
                        field: self.field.into(),
                        path: parent.display().to_string(),
                    });
                }
            }
            if create_dir_tree(path).is_err() {
                return Err(DirectoryError::CannotCreate {
                    field: self.field.into(),
                    path: value.into(),
                });
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(field = self.field, path = value, "created directory");
        }
        Ok(self)
    }

    /// Check that the directory may be deleted under the given policy.
    ///
    /// With `recursive` false a non-empty directory fails with
    /// [`DirectoryError::NotEmpty`]; with `recursive` true any existing
    /// directory passes. Nothing is deleted either way — this asserts the
    /// policy, the caller performs the deletion.
    pub fn ensure_deletable(&self, recursive: bool) -> Result<&Self, DirectoryError> {
        let value = self.require_dir()?;
        if !recursive && self.is_not_empty()? {
            return Err(DirectoryError::NotEmpty {
                field: self.field.into(),
                path: value.into(),
            });
        }
        Ok(self)
    }
}

/// Recursive create with fixed unix permissions.
fn create_dir_tree(path: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fail_every_check() {
        for validator in [
            DirectoryValidator::optional("d", None),
            DirectoryValidator::new("d", ""),
            DirectoryValidator::new("d", "   "),
        ] {
            let expected = DirectoryError::EmptyValue { field: "d".into() };
            assert_eq!(validator.must_exist().unwrap_err(), expected);
            assert_eq!(validator.must_not_exist().unwrap_err(), expected);
            assert_eq!(validator.ensure_exists().unwrap_err(), expected);
            assert_eq!(validator.is_not_empty().unwrap_err(), expected);
        }
    }

    #[test]
    fn missing_directory_fails_existence_dependent_checks() {
        let v = DirectoryValidator::new("d", "/no/such/dir");
        assert!(matches!(v.must_exist().unwrap_err(), DirectoryError::NotExist { .. }));
        assert!(matches!(
            v.must_be_readable().unwrap_err(),
            DirectoryError::NotExist { .. }
        ));
        assert!(matches!(
            v.must_be_writable().unwrap_err(),
            DirectoryError::NotExist { .. }
        ));
        assert!(matches!(
            v.ensure_deletable(true).unwrap_err(),
            DirectoryError::NotExist { .. }
        ));
        assert!(v.must_not_exist().is_ok());
    }

    #[test]
    fn a_file_is_not_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let v = DirectoryValidator::new("d", path);
        assert!(matches!(v.must_exist().unwrap_err(), DirectoryError::NotExist { .. }));
        assert!(v.must_not_exist().is_ok());
    }

    #[test]
    fn errors_name_their_field() {
        let err = DirectoryValidator::new("out", "/no/such/dir").must_exist().unwrap_err();
        assert_eq!(err.field(), "out");
    }
}
