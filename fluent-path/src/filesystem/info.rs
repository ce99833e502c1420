//! Metadata queries.

use std::fs::{self, Metadata};
use std::io::ErrorKind;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::path::PathValue;

impl PathValue {
    /// Query the filesystem status of this path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the status call fails.
    pub fn stat(&self) -> Result<Metadata> {
        Ok(fs::metadata(self.as_path())?)
    }

    /// Returns `true` if the status query succeeds.
    ///
    /// Any failure counts as "does not exist", including permission errors.
    /// Use [`PathValue::try_exists`] to tell those cases apart.
    #[must_use]
    pub fn exists(&self) -> bool {
        match fs::metadata(self.as_path()) {
            Ok(_) => true,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::debug!("treating {} as missing: {e}", self);
                }
                false
            }
        }
    }

    /// Like [`PathValue::exists`], but only a not-found result maps to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for every status failure other than not-found.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_path::PathValue;
    ///
    /// let missing = PathValue::file("/definitely/not/here.txt");
    /// assert!(!missing.try_exists().unwrap());
    /// ```
    pub fn try_exists(&self) -> Result<bool> {
        match fs::metadata(self.as_path()) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Returns `true` if the path exists and is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        fs::metadata(self.as_path()).is_ok_and(|meta| meta.is_dir())
    }

    /// Returns `true` unless the path is an existing directory.
    ///
    /// A missing or unreadable path counts as a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        !self.is_dir()
    }

    /// The last modification time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the status call fails or the platform does
    /// not record modification times.
    pub fn mod_time(&self) -> Result<DateTime<Local>> {
        let modified = self.stat()?.modified()?;
        Ok(DateTime::from(modified))
    }

    /// The last modification time, or the current time alongside the error.
    ///
    /// The returned time is only meaningful when the error is `None`.
    #[must_use]
    pub fn mod_time_or_now(&self) -> (DateTime<Local>, Option<Error>) {
        match self.mod_time() {
            Ok(time) => (time, None),
            Err(e) => (Local::now(), Some(e)),
        }
    }
}
