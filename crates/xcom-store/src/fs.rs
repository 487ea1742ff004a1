use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlobStorage;

/// Filesystem-backed blob storage: one directory per bucket under a root.
///
/// Objects live at `<root>/<bucket>/<key>`. Suitable for local deployments
/// and integration testing against a real filesystem.
pub struct FsBlobStorage {
    root: PathBuf,
}

impl FsBlobStorage {
    /// Create a backend rooted at `root`. The directory is created lazily
    /// on first upload.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }
}

impl BlobStorage for FsBlobStorage {
    fn upload(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
        overwrite: bool,
    ) -> StoreResult<()> {
        let target = self.object_path(bucket, key);
        if !overwrite && target.exists() {
            return Err(StoreError::AlreadyExists {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::unavailable("upload", bucket, key, e.to_string()))?;
        }
        std::fs::copy(local_path, &target)
            .map_err(|e| StoreError::unavailable("upload", bucket, key, e.to_string()))?;
        Ok(())
    }

    fn download(&self, bucket: &str, key: &str, local_dir: &Path) -> StoreResult<PathBuf> {
        let source = self.object_path(bucket, key);
        if !source.exists() {
            warn!(bucket, key, "requested object does not exist");
            return Err(StoreError::unavailable(
                "download",
                bucket,
                key,
                "object does not exist",
            ));
        }
        let file_name = key.rsplit('/').next().unwrap_or(key);
        let target = local_dir.join(file_name);
        std::fs::copy(&source, &target)
            .map_err(|e| StoreError::unavailable("download", bucket, key, e.to_string()))?;
        Ok(target)
    }
}

impl std::fmt::Debug for FsBlobStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsBlobStorage")
            .field("root", &self.root)
            .finish()
    }
}
