//! File ownership queries and changes.
//!
//! Only implemented on Unix. Elsewhere every operation returns
//! [`Error::Unsupported`](crate::Error::Unsupported).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::PathValue;

/// A user account as recorded in the system user database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    uid: u32,
    gid: u32,
    username: String,
    home_dir: PathBuf,
}

impl Owner {
    /// Look up the account with the given user id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OwnerNotFound`] if no account has this id,
    /// [`Error::Io`] if the user database cannot be queried, or
    /// [`Error::Unsupported`] on non-Unix platforms.
    pub fn from_uid(uid: u32) -> Result<Self> {
        Self::lookup(uid)
    }

    /// The account of the effective user running this process.
    ///
    /// # Errors
    ///
    /// See [`Owner::from_uid`].
    pub fn current() -> Result<Self> {
        Self::lookup(sys::effective_uid()?)
    }

    /// Numeric user id.
    #[must_use]
    pub fn uid(&self) -> u32 {
        self.uid
    }

    /// Primary group id.
    #[must_use]
    pub fn gid(&self) -> u32 {
        self.gid
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Home directory as recorded in the user database.
    #[must_use]
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    fn lookup(uid: u32) -> Result<Self> {
        let entry = sys::lookup(uid)?.ok_or(Error::OwnerNotFound { uid })?;
        Ok(Self {
            uid,
            gid: entry.gid,
            username: entry.name,
            home_dir: entry.dir,
        })
    }
}

impl PathValue {
    /// The account that owns this path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the path cannot be queried, plus the errors
    /// of [`Owner::from_uid`].
    pub fn owner(&self) -> Result<Owner> {
        Owner::from_uid(sys::owner_uid(self.as_path())?)
    }

    /// Change the owner and group of this path to `owner`'s uid and primary
    /// gid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the change is refused, or
    /// [`Error::Unsupported`] on non-Unix platforms.
    pub fn chown(&self, owner: &Owner) -> Result<()> {
        log::debug!(
            "chown {} to {}:{} ({})",
            self,
            owner.uid,
            owner.gid,
            owner.username
        );
        sys::chown(self.as_path(), owner.uid, owner.gid)
    }

    /// [`chown`](PathValue::chown) this path and everything beneath it.
    ///
    /// Parents are changed before their children. Symlinked directories are
    /// changed but not descended into. Stops at the first failure, leaving
    /// earlier changes in place.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`PathValue::chown`] or
    /// [`PathValue::read_dir`].
    pub fn chown_tree(&self, owner: &Owner) -> Result<()> {
        self.chown(owner)?;

        let meta = std::fs::symlink_metadata(self.as_path())?;
        if meta.is_dir() {
            for child in self.read_dir(&[])? {
                child.chown_tree(owner)?;
            }
        }
        Ok(())
    }
}

#[cfg(unix)]
mod sys {
    use std::io;
    use std::os::unix::fs::MetadataExt;
    use std::path::{Path, PathBuf};

    use nix::unistd::{self, Uid, User};

    use crate::error::Result;

    pub(super) struct Entry {
        pub(super) gid: u32,
        pub(super) name: String,
        pub(super) dir: PathBuf,
    }

    // Fallible to match the non-Unix signature.
    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn effective_uid() -> Result<u32> {
        Ok(unistd::geteuid().as_raw())
    }

    pub(super) fn owner_uid(path: &Path) -> Result<u32> {
        Ok(std::fs::metadata(path)?.uid())
    }

    pub(super) fn chown(path: &Path, uid: u32, gid: u32) -> Result<()> {
        std::os::unix::fs::chown(path, Some(uid), Some(gid))?;
        Ok(())
    }

    pub(super) fn lookup(uid: u32) -> Result<Option<Entry>> {
        let user = User::from_uid(Uid::from_raw(uid)).map_err(io::Error::from)?;
        Ok(user.map(|user| Entry {
            gid: user.gid.as_raw(),
            name: user.name,
            dir: user.dir,
        }))
    }
}

#[cfg(not(unix))]
mod sys {
    use std::path::{Path, PathBuf};

    use crate::error::{Error, Result};

    pub(super) struct Entry {
        pub(super) gid: u32,
        pub(super) name: String,
        pub(super) dir: PathBuf,
    }

    pub(super) fn effective_uid() -> Result<u32> {
        Err(Error::Unsupported {
            operation: "current owner",
        })
    }

    pub(super) fn owner_uid(_path: &Path) -> Result<u32> {
        Err(Error::Unsupported { operation: "owner" })
    }

    pub(super) fn chown(_path: &Path, _uid: u32, _gid: u32) -> Result<()> {
        Err(Error::Unsupported { operation: "chown" })
    }

    pub(super) fn lookup(_uid: u32) -> Result<Option<Entry>> {
        Err(Error::Unsupported {
            operation: "user lookup",
        })
    }
}
