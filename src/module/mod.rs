//! Import system
//!
//! Discovers importable files under a root directory and resolves them by
//! name.
//!
//! ## Architecture
//!
//! - **Discovery**: a depth-first walk, sorted by file name, that prunes excluded directories
//! - **Keys**: each file is indexed under its name minus the final extension
//! - **Table**: built once at construction; later files shadow earlier ones with the same key
//! - **Resolution**: files are parsed on first access and memoized by canonical path

pub mod traits;
pub mod registry;
pub mod loader;
pub mod resolver;

pub use traits::{FileFormat, ImportError, Loader};
pub use registry::{derive_key, FileWalker, LookupTable, WalkOptions};
pub use loader::{FormatLoader, LoadCache};
pub use resolver::Imports;
