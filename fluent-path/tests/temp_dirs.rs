//! Integration tests for temporary directory creation.
//!
//! Tests that change `HOME` or `FLUENT_PATH_*` variables run serially.

#![cfg(unix)]

mod common;

use common::with_env;
use fluent_path::config::{ENV_TEMP_ROOT, ENV_TEMP_SUBDIR};
use fluent_path::{create_temp_dir, new_temp_dir, Error, TempDir, TempDirConfig};
use serial_test::serial;

#[test]
#[serial]
fn test_new_temp_dir_under_home_tmp() {
    let home = tempfile::tempdir().unwrap();

    let first = with_env("HOME", home.path(), || new_temp_dir("")).unwrap();
    let second = with_env("HOME", home.path(), || new_temp_dir("")).unwrap();

    assert_ne!(first, second);
    assert_eq!(first.parent().as_path(), home.path().join("tmp"));
    assert!(first.is_dir() && second.is_dir());
}

#[test]
#[serial]
fn test_new_temp_dir_patterns() {
    let home = tempfile::tempdir().unwrap();

    let prefixed = with_env("HOME", home.path(), || new_temp_dir("temp")).unwrap();
    let suffixed = with_env("HOME", home.path(), || new_temp_dir("*temp")).unwrap();

    assert!(prefixed.name().starts_with("temp"));
    assert!(suffixed.name().ends_with("temp"));
    assert!(!suffixed.name().starts_with("temp"));
}

#[test]
#[serial]
fn test_new_temp_dir_without_home() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("not-created");

    let err = with_env("HOME", &missing, || new_temp_dir("x")).unwrap_err();
    assert!(matches!(err, Error::Carried(_)));
    assert!(!missing.exists());
}

#[test]
#[serial]
fn test_guard_lifecycle_in_home() {
    let home = tempfile::tempdir().unwrap();
    let guard = with_env("HOME", home.path(), || TempDir::with_pattern("guard-*")).unwrap();
    let path = guard.path().clone();

    guard.join(["nested", "file.txt"]).parent().mkdirs().unwrap();
    guard.join(["nested", "file.txt"]).write("data").unwrap();
    assert!(path.exists());

    guard.cleanup().unwrap();
    assert!(!path.exists());
}

#[test]
fn test_config_root_and_subdir() {
    let root = tempfile::tempdir().unwrap();
    let config = TempDirConfig::default()
        .with_root(root.path().to_str().unwrap())
        .with_subdir("cache/work")
        .with_pattern("run-*");

    let guard = TempDir::new(&config).unwrap();

    assert_eq!(
        guard.parent().as_path(),
        root.path().join("cache").join("work")
    );
    assert!(guard.name().starts_with("run-"));
}

#[test]
fn test_kept_directory_survives_guard() {
    let root = tempfile::tempdir().unwrap();
    let config = TempDirConfig::default().with_root(root.path().to_str().unwrap());

    let kept = TempDir::new(&config).unwrap().keep();
    assert!(kept.is_dir());
}

#[test]
#[serial]
fn test_env_overrides_applied_to_config() {
    let root = tempfile::tempdir().unwrap();

    let mut config = TempDirConfig::default();
    with_env(ENV_TEMP_ROOT, root.path(), || {
        with_env(ENV_TEMP_SUBDIR, "from-env", || config.apply_env_overrides())
    })
    .unwrap();

    let dir = create_temp_dir(&config).unwrap();
    assert_eq!(dir.parent().as_path(), root.path().join("from-env"));
}

#[test]
fn test_config_from_json() {
    let root = tempfile::tempdir().unwrap();
    let json = serde_json::json!({
        "root": root.path().to_str().unwrap(),
        "pattern": "*.d",
    })
    .to_string();

    let config = TempDirConfig::from_json(&json).unwrap();
    let dir = create_temp_dir(&config).unwrap();

    assert!(dir.name().ends_with(".d"));
    assert_eq!(dir.parent().as_path(), root.path().join("tmp"));
}
