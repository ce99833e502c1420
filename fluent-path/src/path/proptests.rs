//! Property-based tests for path values.
//!
//! Note: the lexical module already has property tests for `clean`.
//! This module focuses on the value-level invariants.

use super::lexical;
use super::PathValue;
use crate::error::{PathError, PathErrorKind};
use crate::mode::Mode;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::PRIVATE_FILE),
        Just(Mode::PRIVATE_DIR),
        Just(Mode::READONLY_FILE),
        Just(Mode::READONLY_DIR),
        Just(Mode::PUBLIC_FILE),
        Just(Mode::PUBLIC_DIR),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // join(a, b) followed by parent() twice gets back to the base
    #[test]
    fn join_then_parent_twice(base in absolute_path_strategy(), a in segment_strategy(), b in segment_strategy()) {
        let value = PathValue::dir(base.clone());
        let joined = value.join([a, b]);
        prop_assert!(joined.parent().parent().same_path(&value));
    }

    // with_* never touches the receiver
    #[test]
    fn with_methods_leave_receiver_alone(path in absolute_path_strategy(), other in absolute_path_strategy(), mode in mode_strategy()) {
        let value = PathValue::file(path.clone());
        let _ = value.with_mode(mode);
        let _ = value.with_path(other);
        let _ = value.with_error(PathError::new(PathErrorKind::Other, "x"));

        prop_assert_eq!(value.as_str(), path.as_str());
        prop_assert_eq!(value.mode(), Mode::READONLY_FILE);
        prop_assert!(value.error().is_none());
    }

    // name() is the last split() segment for clean absolute paths
    #[test]
    fn name_is_last_segment(path in absolute_path_strategy()) {
        let value = PathValue::file(path);
        let segments = value.split();
        prop_assert_eq!(Some(&value.name()), segments.last());
    }

    // Adding a single extension yields it back as the suffix and strips to the name
    #[test]
    fn single_extension_stem_and_suffix(name in "[a-z0-9_-]{1,20}", ext in "[a-z0-9]{1,5}") {
        let value = PathValue::file(format!("/dir/{name}.{ext}"));
        prop_assert_eq!(value.suffix(), format!(".{ext}"));
        prop_assert_eq!(value.stem(), name);
    }

    // JSON round-trip reproduces path and mode
    #[test]
    fn serde_round_trip(path in absolute_path_strategy(), mode in mode_strategy()) {
        let value = PathValue::new(path, mode);
        let json = serde_json::to_string(&value).unwrap();
        let back: PathValue = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, value);
    }

    // Joining is the same as cleaning the concatenation
    #[test]
    fn join_matches_clean(base in absolute_path_strategy(), rest in absolute_path_strategy()) {
        let joined = PathValue::dir(base.clone()).join([rest.clone()]);
        prop_assert_eq!(joined.as_str(), lexical::clean(&format!("{base}/{rest}")));
    }
}
