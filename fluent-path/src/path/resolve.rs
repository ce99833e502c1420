//! Home lookup, resolution to absolute form, and prefix-relative rewriting.
//!
//! These are the only path-value operations that can fail. `home` and
//! `resolve` carry their failure on the returned value; `relative_to`
//! returns it.

use std::env;
use std::fs;
use std::path::{is_separator, MAIN_SEPARATOR};

use crate::error::{Error, PathError, PathErrorKind, Result};
use crate::mode::Mode;
use crate::path::lexical;
use crate::path::value::PathValue;

impl PathValue {
    /// The current user's home directory.
    ///
    /// This is the one constructor that performs I/O. On success the mode is
    /// the home directory's on-disk permission bits. On failure the value
    /// carries the error and uses [`Mode::PRIVATE_DIR`]; its path is empty if
    /// the home directory could not be determined at all.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fluent_path::PathValue;
    ///
    /// let home = PathValue::home();
    /// assert!(!home.has_error());
    /// assert!(home.is_absolute());
    /// ```
    #[must_use]
    pub fn home() -> Self {
        let Some(dir) = home::home_dir() else {
            return Self::new("", Mode::PRIVATE_DIR).with_error(PathError::new(
                PathErrorKind::HomeUnavailable,
                "cannot determine home directory",
            ));
        };

        let dir = match dir.into_os_string().into_string() {
            Ok(dir) => dir,
            Err(raw) => {
                return Self::new(raw.to_string_lossy(), Mode::PRIVATE_DIR).with_error(
                    PathError::new(
                        PathErrorKind::HomeUnavailable,
                        "home directory contains invalid UTF-8",
                    ),
                );
            }
        };

        match fs::metadata(&dir) {
            Ok(meta) => Self::new(dir, Mode::from_metadata(&meta)),
            Err(e) => {
                log::debug!("cannot stat home directory {dir}: {e}");
                Self::new(dir, Mode::PRIVATE_DIR).with_error(PathError::from_io(&e))
            }
        }
    }

    /// Resolve to an absolute path.
    ///
    /// 1. A value that already carries an error is returned unchanged.
    /// 2. A leading `~` (and any separators after it) is replaced by the home
    ///    directory from [`PathValue::home`]. The result keeps this value's
    ///    mode and carries the home lookup's error, if any.
    /// 3. Anything else is made absolute against the current working
    ///    directory and cleaned lexically. If the working directory cannot be
    ///    read, this value is returned with a [`PathErrorKind::CurrentDir`]
    ///    error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fluent_path::PathValue;
    ///
    /// let cwd = std::env::current_dir().unwrap();
    /// let resolved = PathValue::dir("./here").resolve();
    /// assert_eq!(resolved.as_path(), cwd.join("here"));
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Self {
        if self.has_error() {
            return self.clone();
        }

        if self.as_str().starts_with('~') {
            let rest = self
                .as_str()
                .trim_start_matches('~')
                .trim_start_matches(is_separator);
            return Self::home().join([rest]).with_mode(self.mode());
        }

        if self.is_absolute() {
            return self.with_path(lexical::clean(self.as_str()));
        }

        match env::current_dir() {
            Ok(cwd) => match cwd.to_str() {
                Some(cwd) => self.with_path(lexical::join_all([cwd, self.as_str()])),
                None => self.with_error(PathError::new(
                    PathErrorKind::CurrentDir,
                    "current directory contains invalid UTF-8",
                )),
            },
            Err(e) => self.with_error(PathError::new(
                PathErrorKind::CurrentDir,
                format!("cannot get current directory: {e}"),
            )),
        }
    }

    /// Rewrite this path relative to `base`.
    ///
    /// The match is a plain string prefix, not a component-wise comparison,
    /// so `/a/bc` is considered relative to `/a/b`. One separator following
    /// the prefix is removed. The result keeps this value's mode and carries
    /// no error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRelative`] if this path does not start with
    /// `base`'s path string.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use fluent_path::PathValue;
    ///
    /// let full = PathValue::file("/a/b/c");
    /// assert_eq!(full.relative_to(&PathValue::dir("/a/b")).unwrap().as_str(), "c");
    /// assert!(PathValue::file("/x/y").relative_to(&PathValue::dir("/a")).is_err());
    /// # }
    /// ```
    pub fn relative_to(&self, base: &PathValue) -> Result<Self> {
        let rest = self
            .as_str()
            .strip_prefix(base.as_str())
            .ok_or_else(|| Error::NotRelative {
                path: self.as_str().to_string(),
                base: base.as_str().to_string(),
            })?;
        let rest = rest.strip_prefix(MAIN_SEPARATOR).unwrap_or(rest);
        Ok(Self::new(rest, self.mode()))
    }
}
