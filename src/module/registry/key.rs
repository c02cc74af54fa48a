//! Lookup key derivation
//!
//! A key is the final path segment with one trailing extension removed.

use std::path::Path;

/// Derive the lookup key for a file path
///
/// Only the last extension is stripped, so `foo.bar.json` becomes `foo.bar`.
/// Names without an extension, including dotfiles such as `.env`, are kept
/// as they are. Returns `None` for paths with no final segment and for names
/// that are not valid UTF-8.
pub fn derive_key(path: &Path) -> Option<String> {
    // file_stem anchors the removal at the end of the name
    path.file_stem()?.to_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_only_trailing_extension() {
        assert_eq!(derive_key(Path::new("foo.bar.js")).as_deref(), Some("foo.bar"));
        assert_eq!(derive_key(Path::new("/root/a.test.json")).as_deref(), Some("a.test"));
        assert_eq!(derive_key(Path::new("json.json")).as_deref(), Some("json"));
    }

    #[test]
    fn test_extension_text_inside_name_is_kept() {
        // naive replace of ".json" would yield "a.toml" here
        assert_eq!(derive_key(Path::new("a.json.toml")).as_deref(), Some("a.json"));
        assert_eq!(derive_key(Path::new("x.jsonl.json")).as_deref(), Some("x.jsonl"));
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(derive_key(Path::new("README")).as_deref(), Some("README"));
        assert_eq!(derive_key(Path::new("/srv/data/Makefile")).as_deref(), Some("Makefile"));
    }

    #[test]
    fn test_dotfiles() {
        assert_eq!(derive_key(Path::new(".env")).as_deref(), Some(".env"));
        assert_eq!(derive_key(Path::new(".eslintrc.json")).as_deref(), Some(".eslintrc"));
    }

    #[test]
    fn test_no_final_segment() {
        assert_eq!(derive_key(Path::new("/")), None);
        assert_eq!(derive_key(Path::new("..")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_has_no_key() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xff.json");
        assert_eq!(derive_key(&Path::new("/r").join(name)), None);
        // lossy decoding would have produced this key
        let other = Path::new("/r/bad\u{FFFD}.json");
        assert_eq!(derive_key(other).as_deref(), Some("bad\u{FFFD}"));
    }
}
