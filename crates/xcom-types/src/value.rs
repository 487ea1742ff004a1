use arrow::record_batch::RecordBatch;
use serde_json::Value as Json;

/// A value produced by one pipeline task and consumed by another.
///
/// The variants are a closed set: every downstream match on an
/// `ExchangeValue` is exhaustive, so adding a variant forces every
/// classification and codec site to be revisited at compile time.
///
/// Ownership follows the task boundary: the upstream task produces the
/// value, the metadata store owns it until consumption, and the downstream
/// task takes it from there. There is no shared mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum ExchangeValue {
    /// Plain text. Stored inline by the primary store.
    Text(String),
    /// An ordered sequence of items. Stored inline by the primary store.
    Sequence(Vec<Json>),
    /// Rows and named columns. Externalized as a columnar file.
    Table(RecordBatch),
    /// Any other structured object (mappings, wrapped numbers, nested
    /// containers). Externalized as structured text.
    Structured(Json),
}

impl ExchangeValue {
    /// Short name of the variant, for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Table(_) => "table",
            Self::Structured(_) => "structured",
        }
    }

    /// Returns `true` if the primary store can hold this value directly.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Sequence(_))
    }
}

impl From<String> for ExchangeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ExchangeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<RecordBatch> for ExchangeValue {
    fn from(batch: RecordBatch) -> Self {
        Self::Table(batch)
    }
}
