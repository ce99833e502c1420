//! Pure string algorithms over path text.
//!
//! Nothing in this module touches the filesystem, so every function is total.
//! The rules are purely lexical:
//! - Repeated separators collapse into one
//! - `.` components are dropped
//! - `..` removes the preceding normal component, disappears directly under
//!   a root, and is kept at the front of a relative path
//! - An empty result becomes `.`

use std::path::{is_separator, Component, Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Lexically clean a path.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fluent_path::path::lexical::clean;
///
/// assert_eq!(clean("/a/./b/../c"), "/a/c");
/// assert_eq!(clean("a//b/"), "a/b");
/// assert_eq!(clean("./here"), "here");
/// assert_eq!(clean("../x"), "../x");
/// assert_eq!(clean("/.."), "/");
/// assert_eq!(clean(""), ".");
/// # }
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    let mut out = String::new();
    let mut rooted = false;
    let mut parts: Vec<&str> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(prefix) => {
                // Windows drive or UNC prefix
                out.push_str(&prefix.as_os_str().to_string_lossy());
            }
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            Component::Normal(segment) => {
                if let Some(segment) = segment.to_str() {
                    parts.push(segment);
                }
            }
        }
    }

    if rooted {
        out.push(MAIN_SEPARATOR);
    }
    out.push_str(&parts.join(MAIN_SEPARATOR_STR));

    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Join path elements with the platform separator and clean the result.
///
/// Empty elements are ignored. If every element is empty the result is the
/// empty string rather than `.`.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fluent_path::path::lexical::join_all;
///
/// assert_eq!(join_all(["a", "b", "c"]), "a/b/c");
/// assert_eq!(join_all(["/a/", "", "/b"]), "/a/b");
/// assert_eq!(join_all(["a", "../b"]), "b");
/// assert_eq!(join_all(["", ""]), "");
/// # }
/// ```
#[must_use]
pub fn join_all<I, S>(elems: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for elem in elems {
        let elem = elem.as_ref();
        if elem.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(MAIN_SEPARATOR);
        }
        joined.push_str(elem);
    }

    if joined.is_empty() {
        joined
    } else {
        clean(&joined)
    }
}

/// Everything but the final element, cleaned.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fluent_path::path::lexical::dir;
///
/// assert_eq!(dir("./here/file.txt"), "here");
/// assert_eq!(dir("./here"), ".");
/// assert_eq!(dir("file"), ".");
/// assert_eq!(dir("/a"), "/");
/// # }
/// ```
#[must_use]
pub fn dir(path: &str) -> String {
    // separators are ASCII, so `i + 1` is a char boundary
    let end = path.rfind(is_separator).map_or(0, |i| i + 1);
    clean(&path[..end])
}

/// The final element of a path.
///
/// Trailing separators are ignored. An empty path yields `.`, and a path made
/// only of separators yields a single separator.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fluent_path::path::lexical::base;
///
/// assert_eq!(base("/some/path/zipfile.tar.gz"), "zipfile.tar.gz");
/// assert_eq!(base("/some/dir/"), "dir");
/// assert_eq!(base(""), ".");
/// assert_eq!(base("///"), "/");
/// # }
/// ```
#[must_use]
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR_STR;
    }
    match trimmed.rfind(is_separator) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// The extension of the final element: the text from its last `.` onwards.
///
/// # Examples
///
/// ```
/// use fluent_path::path::lexical::ext;
///
/// assert_eq!(ext("/some/path/filename.txt"), ".txt");
/// assert_eq!(ext("/some/path/zipfile.tar.gz"), ".gz");
/// assert_eq!(ext("/some/path/dirname"), "");
/// ```
#[must_use]
pub fn ext(path: &str) -> &str {
    let start = path.rfind(is_separator).map_or(0, |i| i + 1);
    let last = &path[start..];
    last.rfind('.').map_or("", |i| &last[i..])
}

/// Strip the extension from a file name by counting dot-separated parts.
///
/// One or two parts keep only the first. Three or more drop the final two
/// parts and rejoin the rest, so `archive.tar.gz` becomes `archive` and
/// `v1.2.3.release` becomes `v1.2`.
///
/// # Examples
///
/// ```
/// use fluent_path::path::lexical::stem;
///
/// assert_eq!(stem("file.txt"), "file");
/// assert_eq!(stem("archive.tar.gz"), "archive");
/// assert_eq!(stem("noext"), "noext");
/// ```
#[must_use]
pub fn stem(name: &str) -> String {
    let parts: Vec<&str> = name.split('.').collect();
    match parts.len() {
        1 | 2 => parts[0].to_string(),
        n => parts[..n - 2].join("."),
    }
}

/// Split on the platform separator, keeping empty segments.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use fluent_path::path::lexical::split;
///
/// assert_eq!(split("./here/file.txt"), vec![".", "here", "file.txt"]);
/// assert_eq!(split("/a//b"), vec!["", "a", "", "b"]);
/// # }
/// ```
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    path.split(MAIN_SEPARATOR).collect()
}
