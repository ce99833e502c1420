#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fluent-path
//!
//! Immutable, chainable path values with a permission mode attached.
//!
//! A [`PathValue`] pairs a path string with the [`Mode`] used when something
//! is created at that path. Every transformation returns a new value, so
//! paths can be built up fluently and passed around freely. Filesystem
//! operations are thin calls into the OS on the value's current path.
//!
//! ## Core Types
//!
//! - [`PathValue`]: the path, its mode, and an optional carried [`PathError`]
//! - [`Mode`]: Unix-style permission bits and the common presets
//! - [`Error`] and [`Result`]: error handling types
//! - [`TempDir`] and [`TempDirConfig`]: temporary directories under `~/tmp`
//!
//! ## Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use fluent_path::{Mode, PathValue};
//!
//! let config = PathValue::dir("/etc/app").join(["conf.d", "main.toml"]);
//! assert_eq!(config.as_str(), "/etc/app/conf.d/main.toml");
//! assert_eq!(config.name(), "main.toml");
//! assert_eq!(config.suffix(), ".toml");
//! assert_eq!(config.parent().as_str(), "/etc/app/conf.d");
//!
//! let secret = config.with_mode(Mode::PRIVATE_FILE);
//! assert_eq!(secret.mode(), Mode::PRIVATE_FILE);
//! assert_eq!(config.mode(), Mode::READONLY_DIR);
//! # }
//! ```
//!
//! ## Logging
//!
//! Mutating filesystem calls and swallowed errors are reported through the
//! [`log`] facade. Install any `log` implementation to see them.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod mode;
pub mod path;
pub mod temp;

#[cfg(test)]
mod test_util;

// Re-export key types at crate root for convenience
pub use config::TempDirConfig;
pub use error::{Error, PathError, PathErrorKind, Result};
pub use filesystem::{apply_filters, Owner, PathFilter};
pub use mode::Mode;
pub use path::{check, PathValue};
pub use temp::{create_temp_dir, new_temp_dir, TempDir};
