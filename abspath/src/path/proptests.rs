//! Property-based tests for the path algebra.
//!
//! Note: The normalize module already has inline property tests for the raw
//! string functions. This module checks the laws `AbsPath` promises.

use super::{AbsPath, PathRelationship};
use crate::probe::OsProbe;
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4}){0,2}"
}

fn abs_path_strategy() -> impl Strategy<Value = AbsPath> {
    prop::collection::vec(path_component_strategy(), 0..8)
        .prop_map(|parts| AbsPath::root().join(parts.join("/")))
}

// Raw input strings, including dots, empty components and a trailing slash
fn messy_input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            path_component_strategy(),
        ],
        0..10,
    )
    .prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // parse(parse(s).string) == parse(s)
    #[test]
    fn parse_idempotent(s in messy_input_strategy()) {
        let once = AbsPath::parse_with(&s, &OsProbe).unwrap();
        let twice = AbsPath::parse_with(once.as_str(), &OsProbe).unwrap();
        prop_assert_eq!(once, twice);
    }

    // join(join(p, "a"), "..") == p
    #[test]
    fn join_then_parent_ref_is_identity(
        path in abs_path_strategy(),
        name in path_component_strategy(),
    ) {
        prop_assert_eq!(path.join(&name).join(".."), path.clone());
        prop_assert_eq!(path.join(&name).parent(), path);
    }

    // join(base, relative(p, base)) == p when base is an ancestor
    #[test]
    fn relative_inverts_join_for_ancestors(
        base in abs_path_strategy(),
        rest in abs_path_strategy(),
    ) {
        let path = base.join(rest.as_str());
        let rel = path.relative_to(&base);
        prop_assert_eq!(base.join(&rel), path);
        prop_assert!(!rel.starts_with(".."));
    }

    // In the divergent case the identity still holds lexically
    #[test]
    fn relative_join_lexical_identity(base in abs_path_strategy(), path in abs_path_strategy()) {
        let rel = path.relative_to(&base);
        prop_assert_eq!(base.join(&rel), path);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn relationship_symmetric(path1 in abs_path_strategy(), path2 in abs_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Ordering agrees with equality
    #[test]
    fn ordering_consistent_with_eq(path1 in abs_path_strategy(), path2 in abs_path_strategy()) {
        prop_assert_eq!(path1.cmp(&path2) == std::cmp::Ordering::Equal, path1 == path2);
        prop_assert_eq!(path1.cmp(&path2), path2.cmp(&path1).reverse());
    }

    // Dropping the extension and adding it back restores the basename
    #[test]
    fn basename_extension_recombine(path in abs_path_strategy()) {
        let ext = path.extension();
        let stem = path.basename_without_extension();
        if ext.is_empty() {
            prop_assert_eq!(stem, path.basename());
        } else {
            prop_assert_eq!(format!("{stem}.{ext}"), path.basename());
        }
    }
}
