//! Path values and the algorithms behind them.
//!
//! # Key Concepts
//!
//! ## Value semantics
//!
//! A [`PathValue`] never changes. `join`, `parent`, `with_mode` and friends
//! all return a new value, so a value can be shared freely and chained:
//!
//! ```
//! # #[cfg(unix)] {
//! use fluent_path::{Mode, PathValue};
//!
//! let root = PathValue::dir("/srv");
//! let config = root.join(["app", "config.yaml"]).with_mode(Mode::PRIVATE_FILE);
//!
//! assert_eq!(root.as_str(), "/srv");
//! assert_eq!(config.as_str(), "/srv/app/config.yaml");
//! assert_eq!(config.parent().name(), "app");
//! # }
//! ```
//!
//! ## Lexical operations
//!
//! `join`, `parent`, `name`, `stem`, `suffix` and `split` only look at the
//! path text (see [`lexical`]). They cannot fail and never touch the disk.
//!
//! ## Carried errors
//!
//! [`PathValue::home`] and [`PathValue::resolve`] can fail but still return a
//! value. The failure is stored on the value as a
//! [`PathError`](crate::PathError) and must be checked by the caller, either
//! one value at a time or in a batch with [`check`]:
//!
//! ```no_run
//! use fluent_path::{check, PathValue};
//!
//! let src = PathValue::dir("~/src").resolve();
//! let out = PathValue::dir("./out").resolve();
//! check([&src, &out]).unwrap();
//! ```

pub mod lexical;
mod resolve;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use value::{check, PathValue};
