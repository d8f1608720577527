//! Ingestion error taxonomy.
//!
//! Every failure is a value-level result so the caller can tell "your file
//! is rejected" apart from "our storage is broken" and pick the matching
//! transport status. Nothing here ever aborts the host process.

use stowage_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported file extension {extension:?} (allowed: {allowed:?})")]
    UnsupportedExtension {
        extension: Option<String>,
        allowed: Vec<String>,
    },

    #[error("Content is {detected}, which is not an allowed image type")]
    ContentMismatch { detected: String },

    #[error("Empty file content")]
    EmptyContent,

    #[error("Storage name collision persisted after {attempts} attempts")]
    TokenCollision { attempts: u32 },

    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
}

impl IngestError {
    /// HTTP status an HTTP-facing caller should map this error to.
    /// Validation rejections are the client's fault; everything else is
    /// a server-side storage problem.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::UnsupportedExtension { .. } | Self::ContentMismatch { .. } | Self::EmptyContent => 400,
            Self::TokenCollision { .. } | Self::Store(_) => 500,
        }
    }

    /// Client-facing message. Storage internals are never leaked.
    pub fn client_message(&self) -> String {
        match self {
            Self::UnsupportedExtension { allowed, .. } => {
                format!("Only image files are allowed ({})", allowed.join(", "))
            }
            Self::ContentMismatch { .. } => {
                "File content is not a supported image type".to_string()
            }
            Self::EmptyContent => "The uploaded file is empty".to_string(),
            Self::TokenCollision { .. } | Self::Store(_) => {
                "Upload failed, please try again later".to_string()
            }
        }
    }
}
