//! Lazy key resolver
//!
//! [`Imports`] indexes a directory tree when constructed and loads a file
//! only when its key is first requested.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ImportsConfig;
use crate::module::loader::LoadCache;
use crate::module::registry::{FileWalker, LookupTable, WalkOptions};
use crate::module::traits::ImportError;

/// Name-keyed view over the importable files below a root directory
///
/// # Example
/// ```rust,no_run
/// use autoimport::Imports;
///
/// let imports = Imports::new("config")?;
/// if let Some(limits) = imports.get("limits")? {
///     println!("{}", limits["max"]);
/// }
/// # Ok::<(), autoimport::ImportError>(())
/// ```
#[derive(Debug)]
pub struct Imports {
    root: PathBuf,
    table: LookupTable,
    cache: Arc<LoadCache>,
}

impl Imports {
    /// Index `root` with default walk options
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, ImportError> {
        Self::with_options(root, &WalkOptions::default())
    }

    /// Index the current working directory
    pub fn from_current_dir() -> Result<Self, ImportError> {
        Self::new(current_dir()?)
    }

    /// Index the directory holding the running executable
    pub fn from_exe_dir() -> Result<Self, ImportError> {
        let exe = std::env::current_exe().map_err(|source| ImportError::RootUnavailable {
            path: PathBuf::new(),
            source,
        })?;
        let dir = exe
            .parent()
            .ok_or_else(|| ImportError::NotADirectory(exe.clone()))?;
        Self::new(dir)
    }

    /// Index `root` with explicit walk options and a private cache
    pub fn with_options<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Self, ImportError> {
        Self::with_cache(root, options, Arc::new(LoadCache::new()))
    }

    /// Index `root`, loading through a cache that may be shared with other
    /// instances
    pub fn with_cache<P: AsRef<Path>>(
        root: P,
        options: &WalkOptions,
        cache: Arc<LoadCache>,
    ) -> Result<Self, ImportError> {
        if !options.accept_all_files {
            for ext in options.extensions.iter().filter(|ext| !cache.supports(ext)) {
                warn!("No loader for .{} files; resolving them will fail", ext);
            }
        }

        let walker = FileWalker::new(root, options)?;
        let root = walker.root().to_path_buf();
        let table = LookupTable::build(walker)?;

        info!("Indexed {} importable files under {:?}", table.len(), root);

        Ok(Self { root, table, cache })
    }

    /// Build from configuration; a missing `root` means the working directory
    pub fn with_config(config: &ImportsConfig) -> Result<Self, ImportError> {
        config
            .validate()
            .map_err(|e| ImportError::InvalidConfig(e.to_string()))?;

        let options = config.to_walk_options();
        match &config.root {
            Some(root) => Self::with_options(root, &options),
            None => Self::with_options(current_dir()?, &options),
        }
    }

    /// Resolve `key` to its loaded value
    ///
    /// Unknown keys yield `Ok(None)`. The first successful load of a path is
    /// cached, so later calls return the same `Arc`.
    pub fn get(&self, key: &str) -> Result<Option<Arc<Value>>, ImportError> {
        let Some(path) = self.table.path_of(key) else {
            debug!("No import named {:?}", key);
            return Ok(None);
        };

        self.cache.load(path).map(Some)
    }

    /// Resolve `key` and deserialize the loaded value into `T`
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ImportError> {
        let Some(value) = self.get(key)? else {
            return Ok(None);
        };

        <T as Deserialize>::deserialize(&*value)
            .map(Some)
            .map_err(|e| ImportError::TypeMismatch {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Path registered for `key`, without loading it
    pub fn path_of(&self, key: &str) -> Option<&Path> {
        self.table.path_of(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        self.table.keys()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Canonical root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    pub fn cache(&self) -> &Arc<LoadCache> {
        &self.cache
    }
}

fn current_dir() -> Result<PathBuf, ImportError> {
    std::env::current_dir().map_err(|source| ImportError::RootUnavailable {
        path: PathBuf::from("."),
        source,
    })
}
