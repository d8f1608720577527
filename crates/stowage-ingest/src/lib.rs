//! Stowage Ingest Library
//!
//! Validated ingestion of untrusted uploaded files: extension
//! allow-listing, magic-byte sniffing (the claimed content type is never
//! trusted), collision-free random naming, and atomic storage through the
//! `stowage-store` seam.
//!
//! The entry point is [`Ingestor::ingest`]. A failed call leaves the
//! filesystem unchanged; a successful call writes exactly one new file and
//! never touches existing ones.

pub mod error;
pub mod service;
pub mod sniff;

// Re-export commonly used types
pub use error::IngestError;
pub use service::Ingestor;
pub use stowage_core::{IngestConfig, StoredAsset, UploadCandidate};
