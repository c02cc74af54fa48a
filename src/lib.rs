//! autoimport - lazy, name-keyed access to data files in a directory tree
//!
//! Walking a root directory once, this crate indexes every importable file
//! (JSON and TOML by default) under its file name without the extension, and
//! parses a file only when its key is first requested.
//!
//! ```rust,no_run
//! use autoimport::Imports;
//!
//! let imports = Imports::from_current_dir()?;
//! let settings = imports.get("settings")?;      // parses settings.json on first use
//! let missing = imports.get("does-not-exist")?;  // Ok(None)
//! assert!(missing.is_none());
//! # let _ = settings;
//! # Ok::<(), autoimport::ImportError>(())
//! ```
//!
//! ## Design Principles
//!
//! 1. **Construct once, read many**: the key table is built completely before the constructor returns
//! 2. **Lazy loading**: nothing is parsed until it is asked for
//! 3. **Path-keyed memoization**: one parsed value per canonical path
//! 4. **Deterministic**: directory entries are visited in sorted order, so collision winners are stable

pub mod config;
pub mod module;
pub mod utils;

// Re-export config module
pub use config::*;

pub use module::{
    derive_key, FileFormat, FileWalker, FormatLoader, ImportError, Imports, LoadCache, Loader,
    LookupTable, WalkOptions,
};
