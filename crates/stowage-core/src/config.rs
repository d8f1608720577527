//! Ingestion configuration.
//!
//! Defaults match the classic avatar-upload rules; environment variables
//! with the `STOWAGE_` prefix override them.

use std::env;

const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];
const DEFAULT_ALLOWED_MEDIA_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif"];
const DEFAULT_TOKEN_RETRY_LIMIT: u32 = 3;

/// Configuration for the ingestion service.
#[derive(Clone, Debug)]
pub struct IngestConfig {
    /// Lowercase filename extensions accepted before any I/O happens.
    pub allowed_extensions: Vec<String>,
    /// Media types the sniffed content must match.
    pub allowed_media_types: Vec<String>,
    /// How many fresh storage tokens to try before giving up on a
    /// (statistically negligible) name collision.
    pub token_retry_limit: u32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: to_owned(DEFAULT_ALLOWED_EXTENSIONS),
            allowed_media_types: to_owned(DEFAULT_ALLOWED_MEDIA_TYPES),
            token_retry_limit: DEFAULT_TOKEN_RETRY_LIMIT,
        }
    }
}

impl IngestConfig {
    /// Load configuration from `STOWAGE_*` environment variables, keeping
    /// the defaults for anything unset or unparsable.
    ///
    /// List variables are comma-separated, e.g.
    /// `STOWAGE_ALLOWED_EXTENSIONS=png,webp`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("STOWAGE_ALLOWED_EXTENSIONS") {
            let list = parse_list(&raw);
            if !list.is_empty() {
                config.allowed_extensions = list;
            }
        }

        if let Ok(raw) = env::var("STOWAGE_ALLOWED_MEDIA_TYPES") {
            let list = parse_list(&raw);
            if !list.is_empty() {
                config.allowed_media_types = list;
            }
        }

        if let Ok(raw) = env::var("STOWAGE_TOKEN_RETRY_LIMIT") {
            if let Ok(limit) = raw.trim().parse::<u32>() {
                config.token_retry_limit = limit.max(1);
            }
        }

        config
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
