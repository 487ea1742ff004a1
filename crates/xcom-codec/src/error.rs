use std::path::PathBuf;

use crate::format::{ExchangeFormat, WireFormat};

/// Errors from value encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The stored key's extension matches none of the known codecs.
    /// Fatal for that single read; never retried, no fallback substituted.
    #[error("unknown file format: {key}")]
    UnsupportedFormat { key: String },

    /// The value's shape does not match the format chosen for it.
    #[error("cannot encode {kind} value as {format}")]
    ValueMismatch {
        kind: &'static str,
        format: ExchangeFormat,
    },

    /// Writing the staging file in the chosen format failed.
    #[error("failed encoding {format} value to {path:?}: {reason}")]
    Encode {
        format: ExchangeFormat,
        path: PathBuf,
        reason: String,
    },

    /// Reconstructing a value from a downloaded file failed.
    #[error("failed decoding {format} value from {path:?}: {reason}")]
    Decode {
        format: WireFormat,
        path: PathBuf,
        reason: String,
    },

    /// I/O error on the staging file itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
