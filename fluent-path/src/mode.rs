//! Permission modes for files and directories.
//!
//! A [`Mode`] is the set of Unix permission bits a [`PathValue`](crate::PathValue)
//! uses when it creates a file or directory. The named constants cover the
//! handful of modes the library hands out by default.

use std::fmt;
use std::fs::Metadata;

use serde::{Deserialize, Serialize};

/// Unix permission bits (`0o7777` at most).
///
/// # Examples
///
/// ```
/// use fluent_path::Mode;
///
/// assert_eq!(Mode::READONLY_FILE.bits(), 0o644);
/// assert_eq!(Mode::READONLY_DIR.to_string(), "0755");
///
/// // File-type bits from a raw st_mode are dropped.
/// assert_eq!(Mode::from_bits(0o40755), Mode::READONLY_DIR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Mode(u32);

impl Mode {
    /// Owner read/write.
    pub const PRIVATE_FILE: Self = Self(0o600);
    /// Owner read/write/execute.
    pub const PRIVATE_EXE: Self = Self(0o700);
    /// Owner-only directory.
    pub const PRIVATE_DIR: Self = Self(0o700);
    /// Owner read/write, everyone else read. Default for files.
    pub const READONLY_FILE: Self = Self(0o644);
    /// Owner full access, everyone else read/traverse. Default for directories.
    pub const READONLY_DIR: Self = Self(0o755);
    /// Everyone read/write.
    pub const PUBLIC_FILE: Self = Self(0o666);
    /// Everyone full access.
    pub const PUBLIC_DIR: Self = Self(0o777);

    /// Mask of the bits a mode may hold (permissions plus setuid/setgid/sticky).
    pub const MASK: u32 = 0o7777;

    /// Build a mode from raw bits, keeping only the permission bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::MASK)
    }

    /// The permission bits recorded in filesystem metadata.
    ///
    /// Platforms without Unix permissions report [`Mode::READONLY_DIR`] or
    /// [`Mode::READONLY_FILE`], with the write bits cleared for read-only
    /// entries.
    #[must_use]
    pub fn from_metadata(meta: &Metadata) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Self::from_bits(meta.permissions().mode())
        }
        #[cfg(not(unix))]
        {
            let base = if meta.is_dir() {
                Self::READONLY_DIR
            } else {
                Self::READONLY_FILE
            };
            if meta.permissions().readonly() {
                Self(base.0 & !0o222)
            } else {
                base
            }
        }
    }

    /// Returns the underlying permission bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if any execute bit is set.
    #[must_use]
    pub const fn is_executable(self) -> bool {
        self.0 & 0o111 != 0
    }
}

impl From<u32> for Mode {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Mode> for u32 {
    fn from(mode: Mode) -> Self {
        mode.0
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl fmt::Octal for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}
