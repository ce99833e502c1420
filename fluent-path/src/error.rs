//! Error types for the fluent-path library.
//!
//! Two error channels exist side by side:
//!
//! - [`Error`] is returned through [`Result`] by every operation that touches
//!   the filesystem, and by [`PathValue::relative_to`](crate::PathValue::relative_to).
//! - [`PathError`] is *carried* on a [`PathValue`](crate::PathValue) by the
//!   few transformations (`home`, `resolve`) that can fail but still hand back
//!   a value for chaining. It is plain data: cloneable, comparable and
//!   serializable.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that may fail with a fluent-path error.
///
/// # Examples
///
/// ```
/// use fluent_path::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fluent-path library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An invalid filesystem path was encountered.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not start with the base it was made relative to.
    #[error("{path} is not relative to {base}")]
    NotRelative {
        /// The path that was being rewritten.
        path: String,
        /// The base path it was expected to start with.
        base: String,
    },

    /// An error that was carried on a path value.
    #[error(transparent)]
    Carried(#[from] PathError),

    /// The operation is not implemented on this platform.
    #[error("{operation} is not supported on this platform")]
    Unsupported {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// No user account exists for a numeric user id.
    #[error("no user found for uid {uid}")]
    OwnerNotFound {
        /// The user id that was looked up.
        uid: u32,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Self::Carried(e) => e.kind() == PathErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == io::ErrorKind::PermissionDenied,
            Self::Carried(e) => e.kind() == PathErrorKind::PermissionDenied,
            _ => false,
        }
    }
}

/// Category of a [`PathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathErrorKind {
    /// The current user's home directory could not be determined.
    HomeUnavailable,
    /// The path (or the home directory) does not exist.
    NotFound,
    /// Access to the path was denied.
    PermissionDenied,
    /// The current working directory could not be read.
    CurrentDir,
    /// Any other failure.
    Other,
}

impl fmt::Display for PathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeUnavailable => write!(f, "home unavailable"),
            Self::NotFound => write!(f, "not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::CurrentDir => write!(f, "current directory unavailable"),
            Self::Other => write!(f, "error"),
        }
    }
}

impl From<io::ErrorKind> for PathErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

/// An error carried as data on a [`PathValue`](crate::PathValue).
///
/// Only the kind and the rendered message are kept. The underlying
/// `io::Error` source is dropped so the value stays `Clone` and survives a
/// serialization round-trip.
///
/// # Examples
///
/// ```
/// use fluent_path::{PathError, PathErrorKind};
///
/// let err = PathError::new(PathErrorKind::Other, "broken");
/// assert_eq!(err.kind(), PathErrorKind::Other);
/// assert_eq!(err.to_string(), "error: broken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct PathError {
    kind: PathErrorKind,
    message: String,
}

impl PathError {
    /// Create a new carried error.
    #[must_use]
    pub fn new(kind: PathErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build a carried error from an I/O failure, mapping its kind.
    #[must_use]
    pub fn from_io(err: &io::Error) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }

    /// The error category.
    #[must_use]
    pub fn kind(&self) -> PathErrorKind {
        self.kind
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::from_io(&err)
    }
}
