//! File loading system
//!
//! Handles parsing discovered files and memoizing the results by path.

pub mod cache;
pub mod loader;

pub use cache::LoadCache;
pub use loader::FormatLoader;
