//! The ingestion service: validate, sniff, name, store.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use stowage_core::{validation, IngestConfig, StoredAsset, UploadCandidate};
use stowage_store::{Store, StoreError};
use uuid::Uuid;

use crate::error::IngestError;
use crate::sniff;

/// Validated file ingestion service.
///
/// Stateless apart from its configuration and the injected store, so one
/// instance can be shared by any number of concurrent callers. Pass it
/// explicitly to every caller that needs it rather than holding it in a
/// global.
#[derive(Clone)]
pub struct Ingestor {
    config: IngestConfig,
    store: Arc<dyn Store>,
}

impl Ingestor {
    pub fn new(config: IngestConfig, store: Arc<dyn Store>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Ingest one uploaded file.
    ///
    /// Validation runs before any filesystem I/O, so a rejected upload
    /// leaves the store untouched. A successful call writes exactly one
    /// new file under a `<32-hex-token>_<sanitized-name>` stored name;
    /// existing files are never overwritten. A failed write cleans up
    /// after itself.
    pub async fn ingest(&self, candidate: UploadCandidate) -> Result<StoredAsset, IngestError> {
        let start = Instant::now();
        let original_name = candidate.original_name.trim();

        if !validation::has_allowed_extension(original_name, &self.config.allowed_extensions) {
            tracing::debug!(
                original_name = %original_name,
                "Rejected upload: extension not allowed"
            );
            return Err(IngestError::UnsupportedExtension {
                extension: validation::extension_of(original_name),
                allowed: self.config.allowed_extensions.clone(),
            });
        }

        if candidate.content.is_empty() {
            return Err(IngestError::EmptyContent);
        }

        let detected = sniff::sniff_media_type(&candidate.content);
        let content_allowed = detected
            .map(|t| self.config.allowed_media_types.iter().any(|a| a == t))
            .unwrap_or(false);
        if !content_allowed {
            let detected = detected.unwrap_or("unknown");
            tracing::debug!(
                original_name = %original_name,
                detected = %detected,
                "Rejected upload: content does not match an allowed image type"
            );
            return Err(IngestError::ContentMismatch {
                detected: detected.to_string(),
            });
        }

        let sanitized = validation::sanitize_filename(original_name);
        let asset = self
            .store_under_fresh_name(&sanitized, &candidate.content)
            .await?;

        tracing::info!(
            stored_name = %asset.stored_name,
            path = %asset.path.display(),
            size_bytes = candidate.content.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Upload ingested"
        );

        Ok(asset)
    }

    /// Convenience wrapper over [`Self::ingest`] for callers holding raw
    /// parts instead of an [`UploadCandidate`].
    pub async fn ingest_bytes(
        &self,
        original_name: &str,
        content: impl Into<Bytes>,
    ) -> Result<StoredAsset, IngestError> {
        self.ingest(UploadCandidate::new(original_name, content))
            .await
    }

    /// Write under a freshly generated random name, regenerating the token
    /// on the (statistically negligible) chance of a collision.
    async fn store_under_fresh_name(
        &self,
        sanitized: &str,
        content: &[u8],
    ) -> Result<StoredAsset, IngestError> {
        let attempts = self.config.token_retry_limit.max(1);

        for attempt in 1..=attempts {
            let stored_name = format!("{}_{}", Uuid::new_v4().simple(), sanitized);
            match self.store.put_new(&stored_name, content).await {
                Ok(path) => return Ok(StoredAsset { stored_name, path }),
                Err(StoreError::AlreadyExists(_)) => {
                    tracing::warn!(
                        stored_name = %stored_name,
                        attempt,
                        "Storage name collision, regenerating token"
                    );
                }
                Err(e) => return Err(IngestError::Store(e)),
            }
        }

        Err(IngestError::TokenCollision { attempts })
    }
}
