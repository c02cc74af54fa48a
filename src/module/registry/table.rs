//! Key to path lookup table

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::module::registry::key::derive_key;
use crate::module::traits::ImportError;

/// Mapping from lookup key to discovered file path
///
/// Built once from a walk and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, PathBuf>,
}

impl LookupTable {
    /// Drain `files` into a table
    ///
    /// A later path with the same key replaces the earlier one. The first
    /// discovery error aborts the build.
    pub fn build<I>(files: I) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = Result<PathBuf, ImportError>>,
    {
        let mut entries = HashMap::new();

        for file in files {
            let path = file?;
            let Some(key) = derive_key(&path) else {
                debug!("Skipping {:?}: file name is not valid UTF-8", path);
                continue;
            };

            if let Some(shadowed) = entries.insert(key.clone(), path) {
                debug!("Key {:?} now points to {:?}, shadowing {:?}", key, entries[&key], shadowed);
            }
        }

        Ok(Self { entries })
    }

    /// Path registered for `key`
    pub fn path_of(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(PathBuf::as_path)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over `(key, path)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(path: &str) -> Result<PathBuf, ImportError> {
        Ok(PathBuf::from(path))
    }

    #[test]
    fn test_build_derives_keys() {
        let table = LookupTable::build(vec![ok("/r/A.json"), ok("/r/sub/B.toml")]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.path_of("A"), Some(Path::new("/r/A.json")));
        assert_eq!(table.path_of("B"), Some(Path::new("/r/sub/B.toml")));
        assert_eq!(table.path_of("C"), None);
        assert_eq!(table.keys(), vec!["A", "B"]);
    }

    #[test]
    fn test_last_write_wins() {
        let table = LookupTable::build(vec![ok("/r/A.toml"), ok("/r/sub/A.json")]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.path_of("A"), Some(Path::new("/r/sub/A.json")));

        // reversed discovery order flips the winner
        let table = LookupTable::build(vec![ok("/r/sub/A.json"), ok("/r/A.toml")]).unwrap();
        assert_eq!(table.path_of("A"), Some(Path::new("/r/A.toml")));
    }

    #[test]
    fn test_error_aborts_build() {
        let files = vec![
            ok("/r/A.json"),
            Err(ImportError::InvalidConfig("boom".to_string())),
            ok("/r/B.json"),
        ];
        assert!(LookupTable::build(files).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = Path::new("/r").join(OsStr::from_bytes(b"a\xff.json"));
        let table = LookupTable::build(vec![ok("/r/a\u{FFFD}.json"), Ok(bad)]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.path_of("a\u{FFFD}"), Some(Path::new("/r/a\u{FFFD}.json")));
    }

    #[test]
    fn test_empty() {
        let table = LookupTable::build(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(!table.contains_key("anything"));
    }
}
