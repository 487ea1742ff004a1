use std::fmt;
use std::path::Path;

use xcom_types::{ExchangeValue, ObjectKey};

use crate::error::{CodecError, CodecResult};
use crate::{structured, tabular};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Serialization format chosen at write time for an externalized value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExchangeFormat {
    /// Columnar binary layout for tabular values.
    Tabular,
    /// Generic structured text for everything else.
    Structured,
}

impl ExchangeFormat {
    /// The on-disk format this write format produces.
    pub fn wire(&self) -> WireFormat {
        match self {
            Self::Tabular => WireFormat::Parquet,
            Self::Structured => WireFormat::Json,
        }
    }

    /// Extension for freshly generated object keys, including the dot.
    pub fn extension(&self) -> &'static str {
        self.wire().extension()
    }
}

impl fmt::Display for ExchangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabular => write!(f, "columnar-tabular"),
            Self::Structured => write!(f, "structured-text"),
        }
    }
}

/// Where a value goes: inline in the primary store, or out to object
/// storage in a specific format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The primary store holds the value directly.
    Inline,
    /// The value is uploaded and replaced by a reference.
    External(ExchangeFormat),
}

/// Decide how a value is stored.
///
/// This is the single classification point; everything downstream matches
/// exhaustively on the result.
pub fn classify(value: &ExchangeValue) -> Disposition {
    match value {
        ExchangeValue::Table(_) => Disposition::External(ExchangeFormat::Tabular),
        ExchangeValue::Text(_) | ExchangeValue::Sequence(_) => Disposition::Inline,
        ExchangeValue::Structured(_) => Disposition::External(ExchangeFormat::Structured),
    }
}

// ---------------------------------------------------------------------------
// Wire formats
// ---------------------------------------------------------------------------

/// On-disk format of a stored object, derived from its key's extension.
///
/// The extension-to-format mapping is part of the stored data's contract:
/// objects written by one version must decode under every later version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// `.parquet` -- columnar-tabular.
    Parquet,
    /// `.json` -- structured text.
    Json,
    /// `.csv` -- legacy tabular objects. Decode only; never written.
    Csv,
}

impl WireFormat {
    /// Every known wire format, in dispatch order.
    pub const ALL: [Self; 3] = [Self::Parquet, Self::Json, Self::Csv];

    /// The key extension for this format, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Parquet => ".parquet",
            Self::Json => ".json",
            Self::Csv => ".csv",
        }
    }

    /// Dispatch on a stored key's extension.
    ///
    /// Errors with [`CodecError::UnsupportedFormat`] for any extension
    /// outside the known set.
    pub fn for_key(key: &ObjectKey) -> CodecResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| key.as_str().ends_with(format.extension()))
            .ok_or_else(|| CodecError::UnsupportedFormat {
                key: key.to_string(),
            })
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parquet => write!(f, "parquet"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

// ---------------------------------------------------------------------------
// Encode / decode dispatch
// ---------------------------------------------------------------------------

/// Write an externalized value to a local staging file in its chosen format.
///
/// The format comes from [`classify`]; a mismatched value/format pair is a
/// caller bug and fails with [`CodecError::ValueMismatch`].
pub fn encode_to_file(
    value: &ExchangeValue,
    format: ExchangeFormat,
    path: &Path,
) -> CodecResult<()> {
    match (format, value) {
        (ExchangeFormat::Tabular, ExchangeValue::Table(batch)) => {
            tabular::write_parquet(batch, path)
        }
        (ExchangeFormat::Structured, ExchangeValue::Structured(json)) => {
            structured::encode(json, path)
        }
        (format, value) => Err(CodecError::ValueMismatch {
            kind: value.kind(),
            format,
        }),
    }
}

/// Reconstruct a value from a downloaded staging file.
pub fn decode_file(format: WireFormat, path: &Path) -> CodecResult<ExchangeValue> {
    match format {
        WireFormat::Parquet => tabular::read_parquet(path).map(ExchangeValue::Table),
        WireFormat::Json => structured::decode(path).map(ExchangeValue::Structured),
        WireFormat::Csv => tabular::read_csv(path).map(ExchangeValue::Table),
    }
}
