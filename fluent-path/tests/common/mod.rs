//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the fluent-path library.

use std::env;
use std::ffi::OsString;

use fluent_path::{Mode, PathValue};
use tempfile::TempDir;

/// Creates a temporary directory and a path value pointing at it.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn scratch() -> (TempDir, PathValue) {
    let dir = tempfile::tempdir().unwrap();
    let path = PathValue::dir(dir.path().to_str().unwrap());
    (dir, path)
}

/// Builder for a small directory tree inside a fresh scratch directory.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let (_guard, root) = TreeFixture::new()
///     .file("README.md", "hello")
///     .dir("src")
///     .file("src/main.rs", "fn main() {}")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    entries: Vec<(String, Option<String>)>,
    mode: Mode,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            mode: Mode::READONLY_DIR,
        }
    }

    /// Adds a file with the given contents. `/`-separated parents are created.
    pub fn file(mut self, relative: &str, contents: &str) -> Self {
        self.entries
            .push((relative.to_string(), Some(contents.to_string())));
        self
    }

    /// Adds an empty directory.
    pub fn dir(mut self, relative: &str) -> Self {
        self.entries.push((relative.to_string(), None));
        self
    }

    /// Sets the mode of the returned root value.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Creates the tree on disk.
    pub fn build(self) -> (TempDir, PathValue) {
        let (guard, root) = scratch();
        let root = root.with_mode(self.mode);

        for (relative, contents) in self.entries {
            let target = root.join(relative.split('/'));
            match contents {
                Some(contents) => {
                    target.parent().mkdirs().unwrap();
                    target.write(contents).unwrap();
                }
                None => target.mkdirs().unwrap(),
            }
        }

        (guard, root)
    }
}

/// Runs `f` with environment variable `key` set to `value`, restoring the
/// previous value afterwards. Callers must be `#[serial]`.
#[allow(dead_code)]
pub fn with_env<T>(key: &str, value: impl Into<OsString>, f: impl FnOnce() -> T) -> T {
    let saved = env::var_os(key);
    env::set_var(key, value.into());
    let result = f();
    match saved {
        Some(previous) => env::set_var(key, previous),
        None => env::remove_var(key),
    }
    result
}

/// Collects the final path elements of `paths`.
#[allow(dead_code)]
pub fn names(paths: &[PathValue]) -> Vec<&str> {
    paths.iter().map(PathValue::name).collect()
}
