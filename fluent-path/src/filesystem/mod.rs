//! Filesystem operations on path values.
//!
//! Every method here is a thin delegation to `std::fs` (or, for ownership,
//! the platform user database). Nothing is cached: each call goes back to
//! the OS with the value's current path string.
//!
//! | Operation | Notes |
//! |---|---|
//! | [`stat`](crate::PathValue::stat), [`exists`](crate::PathValue::exists), [`is_dir`](crate::PathValue::is_dir), [`mod_time`](crate::PathValue::mod_time) | metadata queries |
//! | [`read`](crate::PathValue::read), [`write`](crate::PathValue::write), [`touch`](crate::PathValue::touch), [`open`](crate::PathValue::open) | whole-file I/O; new files get the value's mode |
//! | [`mkdir`](crate::PathValue::mkdir), [`mkdirs`](crate::PathValue::mkdirs), [`remove`](crate::PathValue::remove) | directory creation and recursive removal |
//! | [`rename`](crate::PathValue::rename), [`move_to`](crate::PathValue::move_to), [`copy_to`](crate::PathValue::copy_to) | relocation |
//! | [`read_dir`](crate::PathValue::read_dir) | filtered listing |
//! | [`owner`](crate::PathValue::owner), [`chown`](crate::PathValue::chown), [`chown_tree`](crate::PathValue::chown_tree) | ownership (Unix only) |
//!
//! None of these operations coordinate with each other or with other
//! processes touching the same entry.
//!
//! # Examples
//!
//! ```no_run
//! use fluent_path::PathValue;
//!
//! let out = PathValue::dir("./out");
//! out.mkdirs().unwrap();
//!
//! let report = out.join(["report.txt"]).with_mode(fluent_path::Mode::PRIVATE_FILE);
//! report.write("done\n").unwrap();
//! assert_eq!(report.read_to_string().unwrap(), "done\n");
//! ```

mod dir;
pub mod filters;
mod info;
mod ops;
mod owner;

pub use dir::{apply_filters, PathFilter};
pub use owner::Owner;
