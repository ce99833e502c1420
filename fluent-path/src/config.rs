//! Settings for temporary-directory creation.
//!
//! A [`TempDirConfig`] can be built in code, deserialized from JSON, and
//! then overridden by `FLUENT_PATH_*` environment variables.
//!
//! # Examples
//!
//! ```
//! use fluent_path::TempDirConfig;
//!
//! let config = TempDirConfig::default()
//!     .with_subdir("scratch")
//!     .with_pattern("build-*");
//! assert!(config.validate().is_ok());
//! assert_eq!(config.root, None);
//! ```

use std::env;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding [`TempDirConfig::root`].
pub const ENV_TEMP_ROOT: &str = "FLUENT_PATH_TEMP_ROOT";

/// Environment variable overriding [`TempDirConfig::subdir`].
pub const ENV_TEMP_SUBDIR: &str = "FLUENT_PATH_TEMP_SUBDIR";

const DEFAULT_SUBDIR: &str = "tmp";

/// Where and how temporary directories are created.
///
/// The directory is created inside `root/subdir`, which is made on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TempDirConfig {
    /// Base directory. `None` means the user's home directory. A leading
    /// `~` is expanded.
    pub root: Option<String>,

    /// Relative directory under `root` that holds the temporary
    /// directories.
    pub subdir: String,

    /// Name pattern. Text before the last `*` becomes the name prefix and
    /// text after it the suffix; random characters go in between.
    pub pattern: String,
}

impl Default for TempDirConfig {
    fn default() -> Self {
        Self {
            root: None,
            subdir: DEFAULT_SUBDIR.to_string(),
            pattern: String::new(),
        }
    }
}

impl TempDirConfig {
    /// Set the base directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the subdirectory under the base directory.
    #[must_use]
    pub fn with_subdir(mut self, subdir: impl Into<String>) -> Self {
        self.subdir = subdir.into();
        self
    }

    /// Set the name pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for malformed JSON or unknown
    /// fields, and the errors of [`TempDirConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can produce a directory name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the root is empty, the subdir is
    /// empty, absolute or escapes the root, or the pattern contains a path
    /// separator.
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.root {
            if root.is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "must not be empty".into(),
                });
            }
        }
        Self::validate_subdir("subdir", &self.subdir)?;

        if self.pattern.chars().any(std::path::is_separator) {
            return Err(Error::Validation {
                field: "pattern".into(),
                message: "must not contain a path separator".into(),
            });
        }
        Ok(())
    }

    /// Apply `FLUENT_PATH_*` environment variable overrides.
    ///
    /// Unset variables leave the current value alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable is set to an unusable
    /// value.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(root) = env::var(ENV_TEMP_ROOT) {
            if root.is_empty() {
                return Err(Error::Validation {
                    field: ENV_TEMP_ROOT.into(),
                    message: "must not be empty".into(),
                });
            }
            log::debug!("temp root overridden by {ENV_TEMP_ROOT}: {root}");
            self.root = Some(root);
        }

        if let Ok(subdir) = env::var(ENV_TEMP_SUBDIR) {
            Self::validate_subdir(ENV_TEMP_SUBDIR, &subdir)?;
            log::debug!("temp subdir overridden by {ENV_TEMP_SUBDIR}: {subdir}");
            self.subdir = subdir;
        }

        Ok(())
    }

    fn validate_subdir(field: &str, subdir: &str) -> Result<()> {
        let invalid = |message: &str| Error::Validation {
            field: field.into(),
            message: message.into(),
        };

        if subdir.is_empty() {
            return Err(invalid("must not be empty"));
        }
        let path = Path::new(subdir);
        if path.has_root() {
            return Err(invalid("must be a relative path"));
        }
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(invalid("must not contain '..'"));
        }
        Ok(())
    }
}
