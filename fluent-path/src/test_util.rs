//! Shared test utilities for unit tests.

use tempfile::{tempdir, TempDir};

use crate::PathValue;

/// Creates a scratch directory and a directory path value pointing at it.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the length of the test.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created or its path is not
/// valid UTF-8. This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn scratch() -> (TempDir, PathValue) {
    let dir = tempdir().unwrap();
    let path = PathValue::dir(dir.path().to_str().unwrap());
    (dir, path)
}
