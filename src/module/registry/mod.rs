//! File registry and discovery
//!
//! Handles directory traversal, key derivation, and the key to path table.

pub mod discovery;
pub mod key;
pub mod table;

pub use discovery::{FileWalker, WalkOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};
pub use key::derive_key;
pub use table::LookupTable;
