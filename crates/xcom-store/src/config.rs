use serde::{Deserialize, Serialize};

/// Environment variable naming the destination bucket.
pub const BUCKET_ENV_VAR: &str = "REMOTE_BASE_LOG_BUCKET";

/// Bucket used when the environment does not name one.
pub const DEFAULT_BUCKET: &str = "prod-airflows-logs";

/// Object store configuration.
///
/// The bucket is the single externally supplied setting; the reference
/// prefix and the supported extensions are compile-time constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Destination bucket for externalized values.
    pub bucket: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }
}

impl StoreConfig {
    /// Configuration with an explicit bucket.
    pub fn with_bucket(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }

    /// Resolve the bucket from `REMOTE_BASE_LOG_BUCKET`, falling back to
    /// [`DEFAULT_BUCKET`].
    ///
    /// Call this once at process startup and thread the result through
    /// [`ObjectStoreClient::new`](crate::ObjectStoreClient::new); nothing
    /// reads the environment on the hot path.
    pub fn from_env() -> Self {
        match std::env::var(BUCKET_ENV_VAR) {
            Ok(bucket) if !bucket.is_empty() => Self { bucket },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bucket() {
        let config = StoreConfig::default();
        assert_eq!(config.bucket, "prod-airflows-logs");
    }

    #[test]
    fn explicit_bucket() {
        let config = StoreConfig::with_bucket("staging-values");
        assert_eq!(config.bucket, "staging-values");
    }

    #[test]
    fn from_env_prefers_variable() {
        std::env::set_var(BUCKET_ENV_VAR, "env-bucket");
        let config = StoreConfig::from_env();
        std::env::remove_var(BUCKET_ENV_VAR);
        assert_eq!(config.bucket, "env-bucket");
    }

    #[test]
    fn serde_roundtrip() {
        let config = StoreConfig::with_bucket("b");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
