//! Domain models for file ingestion.

use std::path::PathBuf;

use bytes::Bytes;
use serde::Serialize;

/// An uploaded file as received from an untrusted client.
///
/// Both fields are untrusted: the name may attempt path traversal and the
/// content may not be what the name claims. A candidate lives only for the
/// duration of one ingestion call and is never retained.
#[derive(Clone, Debug)]
pub struct UploadCandidate {
    /// The filename claimed by the uploading client.
    pub original_name: String,
    /// The full payload. Callers are expected to have already capped the
    /// transport size; this type does not impose a limit of its own.
    pub content: Bytes,
}

impl UploadCandidate {
    pub fn new(original_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            original_name: original_name.into(),
            content: content.into(),
        }
    }
}

/// Reference to a successfully stored file.
///
/// Created exactly once per successful ingestion and immutable thereafter.
/// Ownership passes to the caller, which typically persists `stored_name`
/// on its own record; the ingestion layer does not track asset-to-owner
/// relationships.
#[derive(Clone, Debug, Serialize)]
pub struct StoredAsset {
    /// Unique name within the destination directory, of the form
    /// `<32-hex-token>_<sanitized-original-name>`. Contains no path
    /// separators, no `..`, and no leading dot.
    pub stored_name: String,
    /// Location the content was written to.
    pub path: PathBuf,
}
