//! Property tests for key derivation and table construction

mod common;

use autoimport::{derive_key, Imports};
use common::ImportTree;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;

proptest! {
    #[test]
    fn test_key_strips_exactly_one_extension(
        stem in "[a-zA-Z0-9_]{1,8}(\\.[a-zA-Z0-9_]{1,5}){0,2}",
        ext in "[a-z]{1,5}",
        dir in "[a-z]{1,6}",
    ) {
        let path = PathBuf::from(&dir).join(format!("{}.{}", stem, ext));
        prop_assert_eq!(derive_key(&path), Some(stem));
    }

    #[test]
    fn test_key_without_extension_is_unchanged(name in "[a-zA-Z0-9_-]{1,12}") {
        let path = PathBuf::from("/root").join(&name);
        prop_assert_eq!(derive_key(&path), Some(name));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_table_keys_match_file_stems(names in prop::collection::btree_set("[a-z]{1,6}", 1..8)) {
        let tree = ImportTree::new();
        for (i, name) in names.iter().enumerate() {
            // spread files over a few nested directories
            let rel = match i % 3 {
                0 => format!("{}.json", name),
                1 => format!("nested/{}.json", name),
                _ => format!("nested/deeper/{}.toml", name),
            };
            let contents = if rel.ends_with(".toml") { "x = 1" } else { "1" };
            tree.write(&rel, contents);
        }

        let imports = Imports::new(tree.root()).unwrap();
        let keys: BTreeSet<String> = imports.keys().into_iter().map(str::to_string).collect();
        prop_assert_eq!(keys, names);
    }
}
