use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use tracing::debug;
use xcom_types::ObjectKey;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::traits::BlobStorage;

/// A downloaded object staged in a private temporary directory.
///
/// The directory is removed when the guard drops, on every exit path, so
/// repeated reads never leak staging files. No call reuses another call's
/// staging path.
#[derive(Debug)]
pub struct StagedObject {
    path: PathBuf,
    _dir: TempDir,
}

impl StagedObject {
    /// Path of the downloaded file. Valid until the guard drops.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Client for one bucket of the blob store.
///
/// The bucket is fixed at construction (see [`StoreConfig::from_env`]).
/// The client holds no other state: each `put`/`get` is independent, so
/// concurrent calls need no coordination.
///
/// Stored objects are never deleted here; they outlive the pipeline run
/// that created them, and retention belongs to the deployment.
#[derive(Clone)]
pub struct ObjectStoreClient {
    backend: Arc<dyn BlobStorage>,
    bucket: String,
}

impl ObjectStoreClient {
    /// Create a client for the configured bucket.
    pub fn new(backend: Arc<dyn BlobStorage>, config: StoreConfig) -> Self {
        Self {
            backend,
            bucket: config.bucket,
        }
    }

    /// The destination bucket.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Upload the staged file at `local_path` to `key`.
    ///
    /// Always uploads with overwrite: keys are freshly generated per value,
    /// so replacement is a safety net rather than a normal path.
    pub fn put(&self, local_path: &Path, key: &ObjectKey) -> StoreResult<()> {
        debug!(bucket = %self.bucket, key = %key, "uploading externalized value");
        self.backend
            .upload(local_path, &self.bucket, key.as_str(), true)
    }

    /// Download the object at `key` into a fresh private staging directory.
    pub fn get(&self, key: &ObjectKey) -> StoreResult<StagedObject> {
        let dir = tempfile::tempdir()?;
        let path = self.backend.download(&self.bucket, key.as_str(), dir.path())?;
        debug!(bucket = %self.bucket, key = %key, "downloaded externalized value");
        Ok(StagedObject { path, _dir: dir })
    }
}

impl std::fmt::Debug for ObjectStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStoreClient")
            .field("bucket", &self.bucket)
            .finish()
    }
}
