//! Stowage Store Library
//!
//! This crate provides the storage abstraction and the local filesystem
//! backend for ingested files.
//!
//! # Stored names
//!
//! A stored name is a single path component with no separators, no `..`,
//! and no leading dot. Backends must reject anything else before touching
//! the filesystem; the check is shared with `stowage-core` so the write
//! and retrieval paths enforce identical rules.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStore;
pub use traits::{Store, StoreError, StoreResult};
