/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The blob service rejected or could not complete an upload or
    /// download. Not retried here; the calling orchestration layer owns
    /// retry/backoff.
    #[error("object storage unavailable during {op} of {bucket}/{key}: {reason}")]
    Unavailable {
        op: &'static str,
        bucket: String,
        key: String,
        reason: String,
    },

    /// Upload refused because the object exists and overwrite was off.
    #[error("object already exists: {bucket}/{key}")]
    AlreadyExists { bucket: String, key: String },

    /// I/O error on the local staging side.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub(crate) fn unavailable(
        op: &'static str,
        bucket: &str,
        key: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Unavailable {
            op,
            bucket: bucket.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
