//! The immutable path value.
//!
//! [`PathValue`] bundles a path string, the [`Mode`] used when the path is
//! created on disk, and an optional carried [`PathError`]. Every method that
//! looks like a mutation returns a fresh value and leaves the receiver alone.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, PathError, Result};
use crate::mode::Mode;
use crate::path::lexical;

/// An immutable `{path, mode, error}` record.
///
/// The carried error is advisory: construction and transformation never fail
/// outright, so check [`PathValue::error`] (or [`check`]) before trusting a
/// value produced by [`PathValue::home`] or [`PathValue::resolve`].
///
/// `==` compares all three fields. Use [`PathValue::same_path`] to compare
/// path strings only.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fluent_path::{Mode, PathValue};
///
/// let src = PathValue::dir("./here");
/// let file = src.join(["file.txt"]);
///
/// assert_eq!(src.as_str(), "./here");
/// assert_eq!(file.as_str(), "here/file.txt");
/// assert_eq!(file.mode(), Mode::READONLY_DIR);
/// assert_eq!(file.stem(), "file");
/// assert_eq!(file.suffix(), ".txt");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathValue {
    path: String,
    mode: Mode,
    #[serde(rename = "err", default)]
    error: Option<PathError>,
}

impl PathValue {
    /// Create a path value from a path string and mode, stored verbatim.
    ///
    /// No normalization or existence check is done.
    #[must_use]
    pub fn new(path: impl Into<String>, mode: Mode) -> Self {
        Self {
            path: path.into(),
            mode,
            error: None,
        }
    }

    /// Create a path value with the default file mode ([`Mode::READONLY_FILE`]).
    ///
    /// Nothing checks that the path actually is a file.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::{Mode, PathValue};
    ///
    /// assert_eq!(PathValue::file("notes.txt").mode(), Mode::READONLY_FILE);
    /// ```
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path, Mode::READONLY_FILE)
    }

    /// Create a path value with the default directory mode ([`Mode::READONLY_DIR`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::{Mode, PathValue};
    ///
    /// assert_eq!(PathValue::dir("build").mode(), Mode::READONLY_DIR);
    /// ```
    #[must_use]
    pub fn dir(path: impl Into<String>) -> Self {
        Self::new(path, Mode::READONLY_DIR)
    }

    /// The path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The path as a `std::path::Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The mode used when this path is created.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The carried error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&PathError> {
        self.error.as_ref()
    }

    /// Returns `true` if an error is carried.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns `true` if the path string is absolute for this platform.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.as_path().is_absolute()
    }

    /// Copy with a different mode.
    ///
    /// This does not touch the file on disk.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Copy with a different path string.
    #[must_use]
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    /// Copy with a carried error.
    #[must_use]
    pub fn with_error(&self, error: PathError) -> Self {
        Self {
            error: Some(error),
            ..self.clone()
        }
    }

    /// Copy with the carried error cleared.
    #[must_use]
    pub fn without_error(&self) -> Self {
        Self {
            error: None,
            ..self.clone()
        }
    }

    /// Full duplicate of this value. Same as `clone`.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Compare path strings only, ignoring mode and error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::{Mode, PathValue};
    ///
    /// let a = PathValue::file("a.txt");
    /// let b = a.with_mode(Mode::PUBLIC_FILE);
    /// assert!(a.same_path(&b));
    /// assert_ne!(a, b);
    /// ```
    #[must_use]
    pub fn same_path(&self, other: &Self) -> bool {
        self.path == other.path
    }

    /// The parent directory, computed lexically.
    ///
    /// The path does not need to exist.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use fluent_path::PathValue;
    ///
    /// assert_eq!(PathValue::file("./here/file.txt").parent().as_str(), "here");
    /// assert_eq!(PathValue::dir("./here").parent().as_str(), ".");
    /// # }
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        self.with_path(lexical::dir(&self.path))
    }

    /// Append path segments.
    ///
    /// The segments are joined first and the result is appended as a unit.
    /// The combined path is cleaned lexically (see [`lexical::clean`]). No
    /// length or legality check is made.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use fluent_path::PathValue;
    ///
    /// let base = PathValue::dir("/srv");
    /// assert_eq!(base.join(["www", "site"]).as_str(), "/srv/www/site");
    /// assert_eq!(base.join(["a//b/", "../c"]).as_str(), "/srv/a/c");
    /// # }
    /// ```
    #[must_use]
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tail = lexical::join_all(segments);
        self.with_path(lexical::join_all([self.path.as_str(), tail.as_str()]))
    }

    /// The final path segment, extension included.
    #[must_use]
    pub fn name(&self) -> &str {
        lexical::base(&self.path)
    }

    /// The final path segment without its extension.
    ///
    /// One or two dot-separated parts keep the first part. Three or more drop
    /// the last two parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::PathValue;
    ///
    /// assert_eq!(PathValue::file("/tmp/file.txt").stem(), "file");
    /// assert_eq!(PathValue::file("/tmp/archive.tar.gz").stem(), "archive");
    /// assert_eq!(PathValue::file("/tmp/noext").stem(), "noext");
    /// ```
    #[must_use]
    pub fn stem(&self) -> String {
        lexical::stem(self.name())
    }

    /// The extension of the final segment, dot included, or `""`.
    #[must_use]
    pub fn suffix(&self) -> &str {
        lexical::ext(&self.path)
    }

    /// The path split on the platform separator. Empty segments are kept.
    #[must_use]
    pub fn split(&self) -> Vec<&str> {
        lexical::split(&self.path)
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<Path> for PathValue {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl From<&PathValue> for PathBuf {
    fn from(value: &PathValue) -> Self {
        PathBuf::from(&value.path)
    }
}

/// Return the first carried error among `paths`, in order.
///
/// # Errors
///
/// Returns [`Error::Carried`] with a copy of the first error found.
///
/// # Examples
///
/// ```
/// use fluent_path::{check, PathError, PathErrorKind, PathValue};
///
/// let ok = PathValue::file("a");
/// let bad = ok.with_error(PathError::new(PathErrorKind::Other, "boom"));
///
/// assert!(check([&ok, &ok]).is_ok());
/// assert!(check([&ok, &bad, &ok]).is_err());
/// assert!(check(std::iter::empty()).is_ok());
/// ```
pub fn check<'a, I>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = &'a PathValue>,
{
    match paths.into_iter().find_map(PathValue::error) {
        Some(err) => Err(Error::Carried(err.clone())),
        None => Ok(()),
    }
}
