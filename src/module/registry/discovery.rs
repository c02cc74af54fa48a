//! File discovery
//!
//! Walks a root directory depth-first and yields the files that can be
//! imported.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::module::traits::ImportError;

/// Directory names skipped by default (dependency caches)
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Extensions yielded by default
pub const DEFAULT_EXTENSIONS: &[&str] = &["json", "toml"];

/// Walk options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Directory names that prune a subtree wherever they appear in its path
    pub excluded_dirs: Vec<String>,
    /// Extensions (without the dot) of files to yield
    pub extensions: Vec<String>,
    /// Yield every regular file, ignoring `extensions`
    pub accept_all_files: bool,
    /// Descend into symlinked directories
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            accept_all_files: false,
            follow_links: true,
        }
    }
}

type EntryFilter = Box<dyn FnMut(&DirEntry) -> bool + Send>;

/// Lazy depth-first file walker
///
/// Entries are visited in file-name order at every level, so traversal order
/// (and therefore key collision winners) is deterministic.
pub struct FileWalker {
    root: PathBuf,
    inner: walkdir::FilterEntry<walkdir::IntoIter, EntryFilter>,
    extensions: Vec<String>,
    accept_all_files: bool,
}

impl FileWalker {
    /// Create a walker rooted at `root`
    ///
    /// The root is canonicalized up front; a missing root or a root that is
    /// not a directory is reported here rather than on the first `next()`.
    pub fn new<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Self, ImportError> {
        let requested = root.as_ref();
        let root = requested
            .canonicalize()
            .map_err(|source| ImportError::RootUnavailable {
                path: requested.to_path_buf(),
                source,
            })?;

        if !root.is_dir() {
            return Err(ImportError::NotADirectory(root));
        }

        debug!("Walking {:?}", root);

        let excluded = options.excluded_dirs.clone();
        let filter: EntryFilter = Box::new(move |entry: &DirEntry| {
            if is_excluded_dir(entry, &excluded) {
                debug!("Skipping excluded directory {:?}", entry.path());
                return false;
            }
            true
        });

        let inner = WalkDir::new(&root)
            .follow_links(options.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(filter);

        Ok(Self {
            root,
            inner,
            extensions: options.extensions.clone(),
            accept_all_files: options.accept_all_files,
        })
    }

    /// Canonical root of this walk
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.accept_all_files {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

impl Iterator for FileWalker {
    type Item = Result<PathBuf, ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(ImportError::Walk(e))),
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.accepts(entry.path()) {
                trace!("Ignoring {:?} (unrecognized extension)", entry.path());
                continue;
            }

            return Some(Ok(entry.into_path()));
        }
    }
}

/// A directory is excluded when any component of its full path, ancestors of
/// the root included, matches an excluded name
fn is_excluded_dir(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.file_type().is_dir() && path_has_excluded_segment(entry.path(), excluded)
}

fn path_has_excluded_segment(path: &Path, excluded: &[String]) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => excluded.iter().any(|e| name == OsStr::new(e)),
        _ => false,
    })
}
