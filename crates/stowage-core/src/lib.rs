//! Stowage Core Library
//!
//! This crate provides the domain models, configuration, and validation
//! helpers shared by the stowage crates. It performs no I/O; everything
//! here is pure and synchronous.

pub mod config;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use config::IngestConfig;
pub use model::{StoredAsset, UploadCandidate};
