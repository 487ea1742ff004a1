use std::path::{Path, PathBuf};

use crate::error::StoreResult;

/// Key-addressed blob storage, the external service externalized values
/// live in.
///
/// All implementations must satisfy these invariants:
/// - Operations are synchronous and blocking; there is no internal retry,
///   timeout, or cancellation.
/// - `upload` with `overwrite` replaces any existing object at the key.
///   Without `overwrite`, an existing object is an error.
/// - `download` writes the object into `local_dir` and returns the file's
///   path; it never reads or writes outside that directory.
/// - Downloading a missing key is an `Unavailable` error, not an empty
///   file.
/// - All service failures are propagated, never silently ignored.
pub trait BlobStorage: Send + Sync {
    /// Upload the file at `local_path` to `bucket/key`.
    fn upload(&self, local_path: &Path, bucket: &str, key: &str, overwrite: bool)
        -> StoreResult<()>;

    /// Download `bucket/key` into `local_dir`, returning the downloaded
    /// file's path.
    fn download(&self, bucket: &str, key: &str, local_dir: &Path) -> StoreResult<PathBuf>;
}
