use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlobStorage;

/// In-memory, HashMap-based blob storage.
///
/// Intended for tests and embedding. Objects are held per bucket behind a
/// `RwLock` for safe concurrent access. Uploads copy the file's bytes into
/// the map; downloads materialize them under the caller's staging
/// directory.
pub struct InMemoryBlobStorage {
    buckets: RwLock<HashMap<String, HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobStorage {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects across all buckets.
    pub fn object_count(&self) -> usize {
        self.buckets
            .read()
            .expect("lock poisoned")
            .values()
            .map(|bucket| bucket.len())
            .sum()
    }

    /// Returns `true` if no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.object_count() == 0
    }

    /// Returns `true` if `bucket/key` holds an object.
    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.buckets
            .read()
            .expect("lock poisoned")
            .get(bucket)
            .is_some_and(|b| b.contains_key(key))
    }

    /// Store raw bytes directly, bypassing the upload path. Test seeding.
    pub fn insert(&self, bucket: &str, key: &str, bytes: Vec<u8>) {
        self.buckets
            .write()
            .expect("lock poisoned")
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), bytes);
    }

    /// Remove all objects from all buckets.
    pub fn clear(&self) {
        self.buckets.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryBlobStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStorage for InMemoryBlobStorage {
    fn upload(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
        overwrite: bool,
    ) -> StoreResult<()> {
        let bytes = std::fs::read(local_path)?;
        let mut buckets = self.buckets.write().expect("lock poisoned");
        let objects = buckets.entry(bucket.to_string()).or_default();
        if !overwrite && objects.contains_key(key) {
            return Err(StoreError::AlreadyExists {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }
        objects.insert(key.to_string(), bytes);
        Ok(())
    }

    fn download(&self, bucket: &str, key: &str, local_dir: &Path) -> StoreResult<PathBuf> {
        let buckets = self.buckets.read().expect("lock poisoned");
        let bytes = buckets
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .ok_or_else(|| {
                StoreError::unavailable("download", bucket, key, "object does not exist")
            })?;
        let file_name = key.rsplit('/').next().unwrap_or(key);
        let path = local_dir.join(file_name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

impl std::fmt::Debug for InMemoryBlobStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStorage")
            .field("object_count", &self.object_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn upload_and_download() {
        let storage = InMemoryBlobStorage::new();
        let dir = tempfile::tempdir().unwrap();
        let local = staged(dir.path(), "data.json", b"payload");

        storage.upload(&local, "b", "xcom/data_1.json", true).unwrap();
        assert!(storage.contains("b", "xcom/data_1.json"));

        let out = tempfile::tempdir().unwrap();
        let downloaded = storage.download("b", "xcom/data_1.json", out.path()).unwrap();
        assert_eq!(downloaded.file_name().unwrap(), "data_1.json");
        assert_eq!(std::fs::read(downloaded).unwrap(), b"payload");
    }

    #[test]
    fn download_missing_object_fails() {
        let storage = InMemoryBlobStorage::new();
        let out = tempfile::tempdir().unwrap();
        let err = storage.download("b", "xcom/missing.json", out.path()).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }

    #[test]
    fn upload_missing_local_file_fails() {
        let storage = InMemoryBlobStorage::new();
        let err = storage
            .upload(Path::new("/nonexistent/file"), "b", "k", true)
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn overwrite_replaces_bytes() {
        let storage = InMemoryBlobStorage::new();
        let dir = tempfile::tempdir().unwrap();
        storage
            .upload(&staged(dir.path(), "a", b"old"), "b", "k", true)
            .unwrap();
        storage
            .upload(&staged(dir.path(), "b", b"new"), "b", "k", true)
            .unwrap();
        assert_eq!(storage.object_count(), 1);

        let out = tempfile::tempdir().unwrap();
        let downloaded = storage.download("b", "k", out.path()).unwrap();
        assert_eq!(std::fs::read(downloaded).unwrap(), b"new");
    }

    #[test]
    fn no_overwrite_refuses_existing_key() {
        let storage = InMemoryBlobStorage::new();
        let dir = tempfile::tempdir().unwrap();
        let local = staged(dir.path(), "a", b"x");
        storage.upload(&local, "b", "k", false).unwrap();
        let err = storage.upload(&local, "b", "k", false).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
    }

    #[test]
    fn buckets_are_isolated() {
        let storage = InMemoryBlobStorage::new();
        storage.insert("a", "k", b"in-a".to_vec());
        assert!(storage.contains("a", "k"));
        assert!(!storage.contains("b", "k"));
    }

    #[test]
    fn clear_removes_everything() {
        let storage = InMemoryBlobStorage::new();
        storage.insert("a", "k1", vec![1]);
        storage.insert("b", "k2", vec![2]);
        assert_eq!(storage.object_count(), 2);
        storage.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn concurrent_downloads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let storage = Arc::new(InMemoryBlobStorage::new());
        storage.insert("b", "xcom/shared.json", b"shared".to_vec());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    let out = tempfile::tempdir().unwrap();
                    let path = storage.download("b", "xcom/shared.json", out.path()).unwrap();
                    assert_eq!(std::fs::read(path).unwrap(), b"shared");
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
