//! Directory listing with predicate filters.

use std::fs;

use crate::error::{Error, Result};
use crate::path::PathValue;

/// A predicate deciding whether a directory entry is kept.
///
/// See [`filters`](crate::filesystem::filters) for ready-made ones.
pub type PathFilter = dyn Fn(&PathValue) -> bool;

/// Returns `true` if `path` passes every filter. An empty chain passes.
///
/// Filters run in order and stop at the first rejection.
///
/// # Examples
///
/// ```
/// use fluent_path::filesystem::{apply_filters, filters, PathFilter};
/// use fluent_path::PathValue;
///
/// let rust = filters::with_suffix(".rs");
/// let chain: [&PathFilter; 2] = [&rust, &filters::not_hidden];
///
/// assert!(apply_filters(&PathValue::file("src/lib.rs"), &chain));
/// assert!(!apply_filters(&PathValue::file("src/.lib.rs"), &chain));
/// assert!(apply_filters(&PathValue::file("anything"), &[]));
/// ```
#[must_use]
pub fn apply_filters(path: &PathValue, filters: &[&PathFilter]) -> bool {
    filters.iter().all(|filter| filter(path))
}

impl PathValue {
    /// List the immediate children of this directory.
    ///
    /// If this value is not an existing directory, the listing is of its
    /// parent instead. Each child is built by joining its name onto the
    /// listed directory, so it inherits this value's mode. Children are kept
    /// only if every filter accepts them, and come back sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be read, or
    /// [`Error::InvalidPath`] if an entry name is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fluent_path::filesystem::{filters, PathFilter};
    /// use fluent_path::PathValue;
    ///
    /// let src = PathValue::dir("./src");
    /// let rust = filters::with_suffix(".rs");
    /// let sources = src.read_dir(&[&rust]).unwrap();
    /// let everything = src.read_dir(&[]).unwrap();
    /// assert!(sources.len() <= everything.len());
    /// ```
    pub fn read_dir(&self, filters: &[&PathFilter]) -> Result<Vec<PathValue>> {
        let directory = if self.is_file() {
            self.parent()
        } else {
            self.clone()
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(directory.as_path())? {
            let name = entry?.file_name();
            let name = name.into_string().map_err(|raw| Error::InvalidPath {
                path: directory.as_path().join(raw),
                reason: "entry name contains invalid UTF-8".to_string(),
            })?;
            names.push(name);
        }
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| directory.join([name]))
            .filter(|child| apply_filters(child, filters))
            .collect())
    }
}
