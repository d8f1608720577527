use crate::traits::{Store, StoreError, StoreResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem store implementation
///
/// Writes go to a hidden temporary name in the destination directory and
/// are renamed into place after a successful fsync, so no reader ever
/// observes a half-written file.
#[derive(Clone, Debug)]
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `base_path`.
    ///
    /// The directory is created lazily on first write; constructing a
    /// store never touches the filesystem, and a directory removed between
    /// writes is simply recreated.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LocalStore {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a stored name to a filesystem path with security validation.
    ///
    /// Names containing path traversal sequences, separators, or a leading
    /// dot are rejected before any path is formed.
    fn resolve(&self, stored_name: &str) -> StoreResult<PathBuf> {
        if !stowage_core::validation::validate_stored_name(stored_name) {
            return Err(StoreError::InvalidName(stored_name.to_string()));
        }
        Ok(self.base_path.join(stored_name))
    }

    /// Ensure the base directory exists. `create_dir_all` succeeds when the
    /// directory is already there, so concurrent first writes race safely.
    async fn ensure_base_dir(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }
}

async fn write_all_synced(path: &Path, data: &[u8]) -> StoreResult<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    Ok(())
}

#[async_trait]
impl Store for LocalStore {
    async fn put_new(&self, stored_name: &str, data: &[u8]) -> StoreResult<PathBuf> {
        let path = self.resolve(stored_name)?;
        self.ensure_base_dir().await?;

        // A failed stat must not skip this guard: rename would silently
        // replace an existing file.
        if fs::try_exists(&path).await? {
            return Err(StoreError::AlreadyExists(stored_name.to_string()));
        }

        let start = std::time::Instant::now();
        let tmp_path = self.base_path.join(format!(".{}.tmp", stored_name));

        if let Err(e) = write_all_synced(&tmp_path, data).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StoreError::Io(e));
        }

        tracing::info!(
            path = %path.display(),
            stored_name = %stored_name,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local store write successful"
        );

        Ok(path)
    }

    async fn get(&self, stored_name: &str) -> StoreResult<Vec<u8>> {
        let path = self.resolve(stored_name)?;

        if !fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(stored_name.to_string()));
        }

        let data = fs::read(&path).await?;

        tracing::debug!(
            path = %path.display(),
            stored_name = %stored_name,
            size_bytes = data.len(),
            "Local store read successful"
        );

        Ok(data)
    }

    async fn exists(&self, stored_name: &str) -> StoreResult<bool> {
        let path = self.resolve(stored_name)?;
        Ok(fs::try_exists(&path).await?)
    }
}
