//! Fluent checks over a named file path.
//!
//! [`FileValidator`] asserts properties of a filesystem path: existence
//! (either way), regular-file type, extension presence and allow-lists,
//! readability/writability, and size bounds. Checks that only make sense on
//! an existing file (`must_be_readable`, `must_not_exceed_size`, ...) run
//! [`must_exist`](FileValidator::must_exist) first themselves, so the
//! reported error distinguishes "missing" from "present but wrong".
//!
//! Every check asserts against live filesystem state at call time; a path
//! can change between two checks of one chain, and that race is accepted.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sill::file;
//!
//! fn check_upload(path: &str) -> Result<(), sill::FileError> {
//!     file("upload", path)
//!         .must_exist()?
//!         .must_be_file()?
//!         .must_be_extension(&["jpg", "png"])?
//!         .must_not_exceed_size(5 * 1024 * 1024)?;
//!     Ok(())
//! }
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::access;

/// Error raised by [`FileValidator`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileError {
    /// The path has no extension component.
    #[error("{field}: \"{path}\" has no file extension")]
    NoExtension {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The path exists although it must not.
    #[error("{field}: \"{path}\" already exists")]
    Exists {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The path does not exist.
    #[error("{field}: \"{path}\" not found")]
    NotFound {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The path is not a regular file.
    #[error("{field}: \"{path}\" is not a regular file")]
    NotFile {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The file exists but cannot be read.
    #[error("{field}: \"{path}\" is not readable")]
    NotReadable {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The file exists but cannot be written.
    #[error("{field}: \"{path}\" is not writable")]
    NotWritable {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The file extension is not in the allow-list.
    #[error("{field}: extension \"{extension}\" is not one of: {allowed}")]
    InvalidExtension {
        /// Field under validation.
        field: String,
        /// The actual extension, lowercased; empty if the path has none.
        extension: String,
        /// The allowed extensions, comma-joined as supplied.
        allowed: String,
    },

    /// The file exists but is empty.
    #[error("{field}: \"{path}\" is empty")]
    Empty {
        /// Field under validation.
        field: String,
        /// The offending path.
        path: String,
    },

    /// The file is larger than the permitted size.
    #[error("{field}: {actual_bytes} bytes exceeds the limit of {max_bytes} bytes")]
    TooBig {
        /// Permitted maximum size in bytes.
        max_bytes: u64,
        /// Actual size in bytes.
        actual_bytes: u64,
        /// Field under validation.
        field: String,
    },
}

impl FileError {
    /// The field the failed check was attributed to.
    pub fn field(&self) -> &str {
        match self {
            Self::NoExtension { field, .. }
            | Self::Exists { field, .. }
            | Self::NotFound { field, .. }
            | Self::NotFile { field, .. }
            | Self::NotReadable { field, .. }
            | Self::NotWritable { field, .. }
            | Self::InvalidExtension { field, .. }
            | Self::Empty { field, .. }
            | Self::TooBig { field, .. } => field,
        }
    }
}

/// Immutable subject for file-path checks.
#[derive(Debug, Clone, Copy)]
pub struct FileValidator<'v> {
    field: &'v str,
    value: &'v str,
}

impl<'v> FileValidator<'v> {
    /// Create a validator for a file path.
    pub fn new(field: &'v str, value: &'v str) -> Self {
        Self { field, value }
    }

    /// The field this subject is attributed to.
    pub fn field(&self) -> &str {
        self.field
    }

    /// The path under test.
    pub fn value(&self) -> &str {
        self.value
    }

    fn path(&self) -> &Path {
        Path::new(self.value)
    }

    /// The path's extension, if it has a non-empty one.
    fn extension(&self) -> Option<&str> {
        self.path()
            .extension()
            .and_then(OsStr::to_str)
            .filter(|ext| !ext.is_empty())
    }

    fn not_found(&self) -> FileError {
        FileError::NotFound {
            field: self.field.into(),
            path: self.value.into(),
        }
    }

    /// Check that the path has an extension component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::file;
    ///
    /// assert!(file("upload", "report.pdf").must_have_extension().is_ok());
    /// assert!(file("upload", "report").must_have_extension().is_err());
    /// assert!(file("upload", ".gitignore").must_have_extension().is_err());
    /// ```
    pub fn must_have_extension(&self) -> Result<&Self, FileError> {
        if self.extension().is_none() {
            return Err(FileError::NoExtension {
                field: self.field.into(),
                path: self.value.into(),
            });
        }
        Ok(self)
    }

    /// Check that nothing exists at the path.
    pub fn must_not_exist(&self) -> Result<&Self, FileError> {
        if self.path().exists() {
            return Err(FileError::Exists {
                field: self.field.into(),
                path: self.value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the path exists.
    pub fn must_exist(&self) -> Result<&Self, FileError> {
        if !self.path().exists() {
            return Err(self.not_found());
        }
        Ok(self)
    }

    /// Check that the path is a regular file.
    ///
    /// This does not check existence separately: a missing path also fails
    /// with [`FileError::NotFile`]. Chain [`must_exist`](Self::must_exist)
    /// first when the missing/non-file distinction matters.
    pub fn must_be_file(&self) -> Result<&Self, FileError> {
        if !self.path().is_file() {
            return Err(FileError::NotFile {
                field: self.field.into(),
                path: self.value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the file exists and is readable.
    pub fn must_be_readable(&self) -> Result<&Self, FileError> {
        self.must_exist()?;
        if !access::readable(self.path()) {
            return Err(FileError::NotReadable {
                field: self.field.into(),
                path: self.value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the file exists and is writable.
    pub fn must_be_writable(&self) -> Result<&Self, FileError> {
        self.must_exist()?;
        if !access::writable(self.path()) {
            return Err(FileError::NotWritable {
                field: self.field.into(),
                path: self.value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the path's extension is one of `extensions`.
    ///
    /// The comparison is case-insensitive on both sides; a path with no
    /// extension compares as the empty string and therefore never matches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sill::{file, FileError};
    ///
    /// let v = file("upload", "photo.JPG");
    /// assert!(v.must_be_extension(&["jpg", "png"]).is_ok());
    ///
    /// let err = file("upload", "notes.txt")
    ///     .must_be_extension(&["jpg", "png"])
    ///     .unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     FileError::InvalidExtension {
    ///         field: "upload".into(),
    ///         extension: "txt".into(),
    ///         allowed: "jpg, png".into(),
    ///     }
    /// );
    /// ```
    pub fn must_be_extension(&self, extensions: &[&str]) -> Result<&Self, FileError> {
        let actual = self.extension().unwrap_or("").to_ascii_lowercase();
        let allowed = extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(&actual));
        if !allowed {
            return Err(FileError::InvalidExtension {
                field: self.field.into(),
                extension: actual,
                allowed: extensions.join(", "),
            });
        }
        Ok(self)
    }

    /// Check that the file exists and has a non-zero size.
    pub fn must_not_be_empty(&self) -> Result<&Self, FileError> {
        self.must_exist()?;
        if self.size()? == 0 {
            return Err(FileError::Empty {
                field: self.field.into(),
                path: self.value.into(),
            });
        }
        Ok(self)
    }

    /// Check that the file exists and is at most `max_bytes` large.
    ///
    /// A file of exactly `max_bytes` passes.
    pub fn must_not_exceed_size(&self, max_bytes: u64) -> Result<&Self, FileError> {
        self.must_exist()?;
        let actual_bytes = self.size()?;
        if actual_bytes > max_bytes {
            return Err(FileError::TooBig {
                max_bytes,
                actual_bytes,
                field: self.field.into(),
            });
        }
        Ok(self)
    }

    fn size(&self) -> Result<u64, FileError> {
        fs::metadata(self.path())
            .map(|meta| meta.len())
            .map_err(|_| self.not_found())
    }
}
