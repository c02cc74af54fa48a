//! Load cache
//!
//! Memoizes loaded values by canonical path. Keys of the lookup table never
//! reach this layer, so two keys resolving to one file (through a symlink or
//! otherwise) share a value.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::trace;

use crate::module::loader::loader::FormatLoader;
use crate::module::traits::{ImportError, Loader};
use crate::utils::{with_read_lock, with_write_lock};

/// Path-keyed cache of loaded values
///
/// Only successful loads are stored; a failed load is retried on the next
/// request for the same path.
pub struct LoadCache {
    loader: Box<dyn Loader>,
    loaded: RwLock<HashMap<PathBuf, Arc<Value>>>,
}

impl LoadCache {
    /// Create a cache backed by [`FormatLoader`]
    pub fn new() -> Self {
        Self::with_loader(FormatLoader::new())
    }

    /// Create a cache backed by a custom loader
    pub fn with_loader<L: Loader + 'static>(loader: L) -> Self {
        Self {
            loader: Box::new(loader),
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// Load `path`, returning the cached value if it was loaded before
    ///
    /// The path is canonicalized first, so every alias of a file maps to one
    /// cache entry.
    pub fn load(&self, path: &Path) -> Result<Arc<Value>, ImportError> {
        let canonical = path.canonicalize().map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(value) = with_read_lock(&self.loaded, |loaded| loaded.get(&canonical).cloned()) {
            trace!("Cache hit for {:?}", canonical);
            return Ok(value);
        }

        trace!("Cache miss for {:?}", canonical);
        let value = Arc::new(self.loader.load(&canonical)?);

        // A concurrent loader may have won the race; keep its value
        Ok(with_write_lock(&self.loaded, |loaded| {
            Arc::clone(loaded.entry(canonical).or_insert(value))
        }))
    }

    /// Whether `path` has been loaded successfully
    pub fn is_loaded(&self, path: &Path) -> bool {
        match path.canonicalize() {
            Ok(canonical) => with_read_lock(&self.loaded, |loaded| loaded.contains_key(&canonical)),
            Err(_) => false,
        }
    }

    /// Number of cached values
    pub fn len(&self) -> usize {
        with_read_lock(&self.loaded, |loaded| loaded.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the backing loader handles `extension`
    pub fn supports(&self, extension: &str) -> bool {
        self.loader.supports(extension)
    }
}

impl Default for LoadCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadCache")
            .field("loaded", &self.len())
            .finish_non_exhaustive()
    }
}
