use xcom_codec::CodecError;
use xcom_store::StoreError;

use crate::primary::PrimaryStoreError;

/// Errors from value exchange.
///
/// Nothing is recovered locally: every failure propagates unmodified so the
/// calling orchestration layer keeps its own retry/backoff semantics. A
/// failed externalization fails the producing task's value-passing step; a
/// failed reconstitution fails the consuming task's read.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// The blob service could not complete an upload or download.
    #[error("storage unavailable: {0}")]
    Storage(#[from] StoreError),

    /// Encoding or decoding failed, including unknown key extensions.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The primary store could not persist or parse a value.
    #[error(transparent)]
    Primary(#[from] PrimaryStoreError),

    /// Local staging I/O failed before the upload started.
    #[error("staging I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExchangeError {
    /// Returns `true` if this is an unknown-extension decode failure.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::Codec(CodecError::UnsupportedFormat { .. }))
    }

    /// Returns `true` if the blob service was the failing party.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result alias for exchange operations.
pub type ExchangeResult<T> = Result<T, ExchangeError>;
