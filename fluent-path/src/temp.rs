//! Uniquely named temporary directories under the home directory.
//!
//! [`new_temp_dir`] creates a directory that lives until the caller removes
//! it. [`TempDir`] does the same but removes the directory when dropped.
//!
//! # Examples
//!
//! ```no_run
//! use fluent_path::{new_temp_dir, TempDir};
//!
//! // ~/tmp/build-XXXXXX, removed by hand
//! let dir = new_temp_dir("build-*").unwrap();
//! dir.join(["out.log"]).touch().unwrap();
//! dir.remove().unwrap();
//!
//! // removed when `scratch` goes out of scope
//! let scratch = TempDir::with_pattern("*-scratch").unwrap();
//! scratch.join(["notes.txt"]).write("hi").unwrap();
//! ```

use std::ops::Deref;

use crate::config::TempDirConfig;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::path::{check, PathValue};

/// Create a uniquely named directory in `~/tmp`, creating `~/tmp` first if
/// needed.
///
/// With an empty `pattern` the name is random. Otherwise the text before the
/// last `*` is used as the name's prefix and the text after it as its
/// suffix; a pattern without `*` is all prefix. The returned value uses the
/// home directory's mode. Removing the directory is up to the caller.
///
/// # Errors
///
/// Returns [`Error::Carried`] if the home directory is unavailable,
/// [`Error::Validation`] if `pattern` contains a path separator, and
/// [`Error::Io`] if a directory cannot be created.
pub fn new_temp_dir(pattern: &str) -> Result<PathValue> {
    create_temp_dir(&TempDirConfig::default().with_pattern(pattern))
}

/// Like [`new_temp_dir`], with the location and pattern taken from `config`.
///
/// # Errors
///
/// See [`new_temp_dir`]. The configuration is validated first.
pub fn create_temp_dir(config: &TempDirConfig) -> Result<PathValue> {
    config.validate()?;

    let base = base_dir(config)?;
    let parent = base.join([config.subdir.as_str()]);
    parent.mkdirs()?;

    let (prefix, suffix) = split_pattern(&config.pattern);
    let created = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .keep(true)
        .tempdir_in(parent.as_path())?;

    let path = created.path().to_path_buf();
    let path = path.into_os_string().into_string().map_err(|raw| Error::InvalidPath {
        path: raw.into(),
        reason: "temporary directory name contains invalid UTF-8".to_string(),
    })?;

    log::debug!("created temporary directory {path}");
    Ok(PathValue::new(path, base.mode()))
}

fn base_dir(config: &TempDirConfig) -> Result<PathValue> {
    let base = match &config.root {
        None => PathValue::home(),
        Some(root) => {
            let root = PathValue::new(root.as_str(), Mode::PRIVATE_DIR).resolve();
            match root.stat() {
                Ok(meta) => root.with_mode(Mode::from_metadata(&meta)),
                Err(e) => {
                    log::debug!("cannot stat temp root {root}: {e}");
                    root
                }
            }
        }
    };
    check([&base])?;
    Ok(base)
}

fn split_pattern(pattern: &str) -> (&str, &str) {
    match pattern.rfind('*') {
        Some(star) => (&pattern[..star], &pattern[star + 1..]),
        None => (pattern, ""),
    }
}

/// A temporary directory that is removed when dropped.
///
/// Derefs to the [`PathValue`] of the directory, so every path operation is
/// available on the guard itself.
#[derive(Debug)]
pub struct TempDir {
    path: PathValue,
    armed: bool,
}

impl TempDir {
    /// Create a temporary directory as described by `config`.
    ///
    /// # Errors
    ///
    /// See [`create_temp_dir`].
    pub fn new(config: &TempDirConfig) -> Result<Self> {
        Ok(Self {
            path: create_temp_dir(config)?,
            armed: true,
        })
    }

    /// Create a temporary directory in `~/tmp` named after `pattern`.
    ///
    /// # Errors
    ///
    /// See [`new_temp_dir`].
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Self::new(&TempDirConfig::default().with_pattern(pattern))
    }

    /// The directory.
    #[must_use]
    pub fn path(&self) -> &PathValue {
        &self.path
    }

    /// Remove the directory now and report any failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be removed.
    pub fn cleanup(mut self) -> Result<()> {
        self.armed = false;
        self.path.remove()
    }

    /// Stop the guard from removing the directory and hand it back.
    #[must_use]
    pub fn keep(mut self) -> PathValue {
        self.armed = false;
        self.path.clone()
    }
}

impl Deref for TempDir {
    type Target = PathValue;

    fn deref(&self) -> &PathValue {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = self.path.remove() {
            log::warn!("failed to remove temporary directory {}: {e}", self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn rooted(pattern: &str) -> (tempfile::TempDir, TempDirConfig) {
        let root = tempfile::tempdir().unwrap();
        let config = TempDirConfig::default()
            .with_root(root.path().to_str().unwrap())
            .with_pattern(pattern);
        (root, config)
    }

    #[test]
    fn test_split_pattern() {
        assert_eq!(split_pattern(""), ("", ""));
        assert_eq!(split_pattern("temp"), ("temp", ""));
        assert_eq!(split_pattern("*temp"), ("", "temp"));
        assert_eq!(split_pattern("pre*post"), ("pre", "post"));
        assert_eq!(split_pattern("a*b*c"), ("a*b", "c"));
    }

    #[test]
    fn test_create_under_root_and_subdir() {
        let (root, config) = rooted("job-*");
        let dir = create_temp_dir(&config).unwrap();

        assert!(dir.is_dir());
        assert!(dir.name().starts_with("job-"));
        assert!(dir.name().len() > "job-".len());
        assert_eq!(dir.parent().as_path(), root.path().join("tmp"));
    }

    #[test]
    fn test_pattern_suffix() {
        let (_root, config) = rooted("*.work");
        let dir = create_temp_dir(&config).unwrap();
        assert!(dir.name().ends_with(".work"));
    }

    #[test]
    fn test_names_are_unique() {
        let (_root, config) = rooted("same");
        let a = create_temp_dir(&config).unwrap();
        let b = create_temp_dir(&config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_mode_comes_from_root() {
        let (root, config) = rooted("");
        let expected = Mode::from_metadata(&root.path().metadata().unwrap());
        let dir = create_temp_dir(&config).unwrap();
        assert_eq!(dir.mode(), expected);
    }

    #[test]
    fn test_missing_root_is_created_private() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("fresh-root");
        let config = TempDirConfig::default().with_root(root.to_str().unwrap());

        let dir = create_temp_dir(&config).unwrap();

        assert_eq!(dir.mode(), Mode::PRIVATE_DIR);
        assert_eq!(dir.parent().as_path(), root.join("tmp"));
        assert!(root.is_dir());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let (_root, config) = rooted("a/b");
        assert!(matches!(
            create_temp_dir(&config),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_guard_removes_on_drop() {
        let (_root, config) = rooted("");
        let guard = TempDir::new(&config).unwrap();
        let path = guard.path().clone();
        guard.join(["inner.txt"]).write("x").unwrap();

        assert!(path.exists());
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_guard_keep() {
        let (_root, config) = rooted("");
        let kept = TempDir::new(&config).unwrap().keep();
        assert!(kept.is_dir());
        kept.remove().unwrap();
    }

    #[test]
    fn test_guard_cleanup() {
        let (_root, config) = rooted("");
        let guard = TempDir::new(&config).unwrap();
        let path = guard.path().clone();

        guard.cleanup().unwrap();
        assert!(!path.exists());
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_new_temp_dir_in_home() {
        let home = tempfile::tempdir().unwrap();
        let previous = env::var_os("HOME");
        env::set_var("HOME", home.path());

        let result = new_temp_dir("home-*");

        match previous {
            Some(value) => env::set_var("HOME", value),
            None => env::remove_var("HOME"),
        }

        let dir = result.unwrap();
        assert!(dir.exists());
        assert_eq!(dir.parent().as_path(), home.path().join("tmp"));
        dir.remove().unwrap();
        assert!(!dir.exists());
    }
}
