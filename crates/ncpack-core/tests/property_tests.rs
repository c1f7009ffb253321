//! Property-based tests for file selection.
//!
//! These tests use proptest to generate arbitrary paths and verify the
//! filter and ordering rules hold across a wide range of cases.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ncpack_core::ExclusionSet;
use ncpack_core::MatchMode;
use ncpack_core::creation::filters::entry_name;
use ncpack_core::creation::filters::has_literal_prefix;
use ncpack_core::creation::filters::has_rejected_extension;
use ncpack_core::creation::walker::sort_by_path_length;
use proptest::prelude::*;
use std::path::Path;
use std::path::PathBuf;

proptest! {
    /// Any file ending in `.psd` is rejected, wherever it lives.
    #[test]
    fn prop_psd_always_rejected(
        dirs in prop::collection::vec("[a-zA-Z0-9_ ]{1,12}", 0..5),
        stem in "[a-zA-Z0-9_.]{0,12}"
    ) {
        let mut path = PathBuf::from("/mods");
        for dir in &dirs {
            path.push(dir);
        }
        path.push(format!("{stem}.psd"));
        prop_assert!(has_rejected_extension(&path));
    }

    /// Other extensions, including other casings of `psd`, pass.
    #[test]
    fn prop_other_extensions_pass(
        stem in "[a-z]{1,8}",
        ext in "[a-zA-Z0-9]{1,5}"
    ) {
        prop_assume!(ext != "psd");
        let path = PathBuf::from(format!("/mods/generic/{stem}.{ext}"));
        prop_assert!(!has_rejected_extension(&path));
    }

    /// Literal mode excludes exactly the paths with a string prefix match.
    #[test]
    fn prop_literal_mode_is_string_prefix(
        excluded in "[a-z]{1,6}",
        candidate in "[a-z]{1,10}(/[a-z]{1,6}){0,3}"
    ) {
        let prefix = PathBuf::from(format!("/mods/generic/{excluded}"));
        let path = PathBuf::from(format!("/mods/generic/{candidate}"));
        let set = ExclusionSet::new(vec![prefix.clone()], MatchMode::Literal);

        let expected = path.to_str().unwrap().starts_with(prefix.to_str().unwrap());
        prop_assert_eq!(set.is_excluded(&path), expected);
        prop_assert_eq!(has_literal_prefix(&path, &prefix), expected);
    }

    /// Component matching never excludes more than literal matching.
    #[test]
    fn prop_component_mode_is_subset_of_literal(
        excluded in "[a-z]{1,6}",
        candidate in "[a-z]{1,10}(/[a-z]{1,6}){0,3}"
    ) {
        let prefix = vec![PathBuf::from(format!("/mods/generic/{excluded}"))];
        let path = PathBuf::from(format!("/mods/generic/{candidate}"));
        let literal = ExclusionSet::new(prefix.clone(), MatchMode::Literal);
        let component = ExclusionSet::new(prefix, MatchMode::Component);

        if component.is_excluded(&path) {
            prop_assert!(literal.is_excluded(&path));
        }
    }

    /// Sorting yields non-decreasing path lengths and keeps every path.
    #[test]
    fn prop_sort_by_path_length(
        names in prop::collection::vec("[a-z]{1,20}(/[a-z]{1,8}){0,3}", 0..30)
    ) {
        let mut files: Vec<PathBuf> = names
            .iter()
            .map(|n| PathBuf::from(format!("/mods/generic/{n}")))
            .collect();
        let mut expected = files.clone();
        sort_by_path_length(&mut files);

        prop_assert!(files
            .windows(2)
            .all(|w| w[0].as_os_str().len() <= w[1].as_os_str().len()));

        files.sort();
        expected.sort();
        prop_assert_eq!(files, expected);
    }

    /// Entry names are the root-relative path joined with `/`.
    #[test]
    fn prop_entry_name_strips_root(
        components in prop::collection::vec("[a-zA-Z0-9_ .-]{1,12}", 1..6)
    ) {
        prop_assume!(components.iter().all(|c| c != "." && c != ".."));
        let root = Path::new("/mods");
        let mut source = root.to_path_buf();
        for c in &components {
            source.push(c);
        }

        let name = entry_name(&source, root).unwrap();
        prop_assert_eq!(name, components.join("/"));
    }
}
