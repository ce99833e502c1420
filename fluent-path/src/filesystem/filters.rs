//! Ready-made [`PathFilter`](super::PathFilter) predicates for
//! [`PathValue::read_dir`](crate::PathValue::read_dir).
//!
//! Plain functions can be passed by reference directly. [`with_suffix`]
//! builds a closure, so bind it first:
//!
//! ```no_run
//! use fluent_path::filesystem::{filters, PathFilter};
//! use fluent_path::PathValue;
//!
//! let toml = filters::with_suffix(".toml");
//! let chain: [&PathFilter; 2] = [&filters::files_only, &toml];
//! let manifests = PathValue::dir(".").read_dir(&chain).unwrap();
//! ```

use crate::path::PathValue;

/// Keeps existing directories.
#[must_use]
pub fn dirs_only(path: &PathValue) -> bool {
    path.is_dir()
}

/// Keeps everything that is not a directory.
#[must_use]
pub fn files_only(path: &PathValue) -> bool {
    path.is_file()
}

/// Keeps entries whose final element starts with a dot.
#[must_use]
pub fn hidden(path: &PathValue) -> bool {
    path.name().starts_with('.')
}

/// Keeps entries whose final element does not start with a dot.
#[must_use]
pub fn not_hidden(path: &PathValue) -> bool {
    !hidden(path)
}

/// Keeps entries whose extension equals `suffix` exactly, dot included.
///
/// ```
/// use fluent_path::filesystem::filters::with_suffix;
/// use fluent_path::PathValue;
///
/// let rs = with_suffix(".rs");
/// assert!(rs(&PathValue::file("main.rs")));
/// assert!(!rs(&PathValue::file("main.rs.bak")));
/// ```
pub fn with_suffix(suffix: impl Into<String>) -> impl Fn(&PathValue) -> bool {
    let suffix = suffix.into();
    move |path| path.suffix() == suffix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::scratch;

    #[test]
    fn test_hidden_and_not_hidden() {
        let dotfile = PathValue::file("/home/u/.bashrc");
        let plain = PathValue::file("/home/u/notes.md");

        assert!(hidden(&dotfile));
        assert!(!not_hidden(&dotfile));
        assert!(!hidden(&plain));
        assert!(not_hidden(&plain));
    }

    #[test]
    fn test_hidden_looks_at_final_element_only() {
        assert!(!hidden(&PathValue::file("/home/.config/app.toml")));
    }

    #[test]
    fn test_with_suffix() {
        let md = with_suffix(".md");
        assert!(md(&PathValue::file("README.md")));
        assert!(!md(&PathValue::file("README")));
        assert!(!md(&PathValue::file("README.MD")));

        let bare = with_suffix("");
        assert!(bare(&PathValue::file("Makefile")));
        assert!(!bare(&PathValue::file("main.c")));
    }

    #[test]
    fn test_dirs_only_and_files_only() {
        let (_guard, dir) = scratch();
        let file = dir.join(["f.txt"]);
        file.touch().unwrap();

        assert!(dirs_only(&dir));
        assert!(!files_only(&dir));
        assert!(files_only(&file));
        assert!(!dirs_only(&file));
    }
}
