//! Reading, writing, creating and relocating files.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::path::PathValue;

impl PathValue {
    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.as_path())?)
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read or
    /// is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        Ok(fs::read_to_string(self.as_path())?)
    }

    /// Replace the file's contents with `data`.
    ///
    /// An existing file is truncated. A new file is created with this value's
    /// mode (subject to the process umask).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or
    /// written.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        let data = data.as_ref();
        log::debug!("writing {} bytes to {}", data.len(), self);
        let mut file = self.create_options().open(self.as_path())?;
        file.write_all(data)?;
        Ok(())
    }

    /// Write an empty file, truncating any existing contents.
    ///
    /// # Errors
    ///
    /// Same as [`PathValue::write`].
    pub fn touch(&self) -> Result<()> {
        self.write(b"")
    }

    /// Open the file for reading if it exists, or create it empty if it does
    /// not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if opening or creating fails.
    pub fn open(&self) -> Result<File> {
        if self.exists() {
            Ok(File::open(self.as_path())?)
        } else {
            Ok(self.create_options().read(true).open(self.as_path())?)
        }
    }

    /// Create this directory. The parent must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the directory exists or
    /// cannot be created.
    pub fn mkdir(&self) -> Result<()> {
        log::debug!("creating directory {} ({})", self, self.mode());
        self.dir_builder(false).create(self.as_path())?;
        Ok(())
    }

    /// Create this directory and any missing parents. Succeeds if it already
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if any directory cannot be
    /// created.
    pub fn mkdirs(&self) -> Result<()> {
        log::debug!("creating directories {} ({})", self, self.mode());
        self.dir_builder(true).create(self.as_path())?;
        Ok(())
    }

    /// Remove the file, or the directory and everything under it.
    ///
    /// Removing a path that does not exist succeeds. A symlink is removed
    /// itself, never its target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if removal fails.
    pub fn remove(&self) -> Result<()> {
        let meta = match fs::symlink_metadata(self.as_path()) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        log::debug!("removing {}", self);
        let result = if meta.is_dir() {
            fs::remove_dir_all(self.as_path())
        } else {
            fs::remove_file(self.as_path())
        };

        match result {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Rename this path to `to` and return `to`.
    ///
    /// Renaming across filesystems fails as the OS dictates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the rename fails.
    pub fn rename(&self, to: &PathValue) -> Result<PathValue> {
        log::debug!("renaming {} to {}", self, to);
        fs::rename(self.as_path(), to.as_path())?;
        Ok(to.clone())
    }

    /// Move this entry into `directory`, keeping its name.
    ///
    /// `directory` and any missing parents are created first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the directory cannot be
    /// created or the rename fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fluent_path::PathValue;
    ///
    /// let log = PathValue::file("./build.log");
    /// let archived = log.move_to(&PathValue::dir("./archive/2024")).unwrap();
    /// assert_eq!(archived.name(), "build.log");
    /// ```
    pub fn move_to(&self, directory: &PathValue) -> Result<PathValue> {
        directory.mkdirs()?;
        self.rename(&directory.join([self.name()]))
    }

    /// Copy this file's bytes into `dst` and return `dst`.
    ///
    /// The source is opened with [`PathValue::open`], so a missing source is
    /// created empty. The destination is created with its own mode or
    /// truncated, then synced to disk. The copy is not atomic: a failure
    /// part-way through can leave a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `dst` names the same file as this
    /// path (directly, through a symlink, or as a hard link), and
    /// [`Error::Io`] if either file cannot be opened or the copy or sync
    /// fails.
    pub fn copy_to(&self, dst: &PathValue) -> Result<PathValue> {
        let mut src = self.open()?;
        if same_file(self, &src.metadata()?, dst)? {
            return Err(Error::InvalidPath {
                path: dst.into(),
                reason: "source and destination are the same file".to_string(),
            });
        }
        let mut out = dst.create_options().open(dst.as_path())?;

        let copied = io::copy(&mut src, &mut out)?;
        out.sync_all()?;

        log::debug!("copied {copied} bytes from {} to {}", self, dst);
        Ok(dst.clone())
    }

    fn create_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.mode().bits());
        }
        options
    }

    fn dir_builder(&self, recursive: bool) -> DirBuilder {
        let mut builder = DirBuilder::new();
        builder.recursive(recursive);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.mode().bits());
        }
        builder
    }
}

/// Returns `true` if `dst` exists and is the same file as `src`.
fn same_file(src: &PathValue, src_meta: &fs::Metadata, dst: &PathValue) -> Result<bool> {
    let dst_meta = match fs::metadata(dst.as_path()) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let _ = src;
        Ok(src_meta.dev() == dst_meta.dev() && src_meta.ino() == dst_meta.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (src_meta, dst_meta);
        Ok(fs::canonicalize(src.as_path())? == fs::canonicalize(dst.as_path())?)
    }
}
