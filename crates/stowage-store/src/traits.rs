//! Storage abstraction trait
//!
//! This module defines the Store trait that storage backends implement.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid stored name: {0}")]
    InvalidName(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage abstraction trait
///
/// Backends are write-once: a stored name is claimed by exactly one write
/// and never overwritten or rewritten afterwards. Deleting is not part of
/// this seam; retention is the caller's concern.
#[async_trait]
pub trait Store: Send + Sync {
    /// Write `data` under `stored_name`, failing with
    /// [`StoreError::AlreadyExists`] if the name is taken.
    ///
    /// The write is atomic from the caller's point of view: afterwards the
    /// file either exists in full or not at all, and a failed call leaves
    /// no partial file visible. The backing directory is created on demand,
    /// idempotently under concurrent first use.
    ///
    /// Returns the location the file was written to.
    async fn put_new(&self, stored_name: &str, data: &[u8]) -> StoreResult<PathBuf>;

    /// Read back a previously stored file.
    ///
    /// The name is re-validated before resolution, so names sourced from
    /// untrusted input cannot traverse outside the storage directory.
    async fn get(&self, stored_name: &str) -> StoreResult<Vec<u8>>;

    /// Check whether `stored_name` is taken.
    async fn exists(&self, stored_name: &str) -> StoreResult<bool>;
}
