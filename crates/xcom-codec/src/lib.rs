//! Format codecs for externalized task values.
//!
//! Every value that leaves the primary metadata store is written to a local
//! staging file in one of a closed set of formats, and reconstructed from
//! such a file on read. This crate owns both directions:
//!
//! - [`classify`] decides whether a value stays inline or is externalized,
//!   and in which format
//! - [`encode_to_file`] writes an externalized value in its chosen format
//! - [`decode_file`] reconstructs a value, dispatching purely on the stored
//!   key's extension via [`WireFormat::for_key`]
//!
//! # Formats
//!
//! - `.parquet` -- columnar-tabular, written for table values
//! - `.json` -- structured text, written for structured values
//! - `.csv` -- legacy tabular, decode only; this crate never writes it
//!
//! Encode and decode may run in different processes, so the extension-to-
//! format mapping must stay stable across versions. Any other extension
//! fails decoding with [`CodecError::UnsupportedFormat`] -- fatal for that
//! single read, never retried or defaulted.

pub mod error;
pub mod format;
pub mod structured;
pub mod tabular;

// Re-exports for convenience.
pub use error::{CodecError, CodecResult};
pub use format::{classify, decode_file, encode_to_file, Disposition, ExchangeFormat, WireFormat};
