use serde_json::Value as Json;
use xcom_types::ExchangeValue;

/// A value as persisted by the orchestrator's primary metadata store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryStoreValue(Vec<u8>);

impl PrimaryStoreValue {
    /// Wrap raw persisted bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The persisted bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the wrapper and return the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Errors from the primary store pass-through.
#[derive(Debug, thiserror::Error)]
pub enum PrimaryStoreError {
    /// The primary store cannot hold this value shape inline.
    #[error("primary store cannot hold a {kind} value inline")]
    UnsupportedValue { kind: &'static str },

    /// Encoding or parsing the persisted form failed.
    #[error("primary store serialization failed: {0}")]
    Serialization(String),
}

/// The orchestrator's own value persistence, which the exchange gate
/// overrides rather than replaces.
///
/// The gate calls through to this for every inline value and for the final
/// encode/decode of reference strings, so everything it produces stays
/// compatible with however the orchestrator persists values.
pub trait PrimaryStore: Send + Sync {
    /// Persist a native-inline value (or a reference string).
    fn base_serialize(&self, value: &ExchangeValue) -> Result<PrimaryStoreValue, PrimaryStoreError>;

    /// Recover the value a stored cell holds.
    fn base_deserialize(&self, stored: &PrimaryStoreValue)
        -> Result<ExchangeValue, PrimaryStoreError>;
}

/// JSON-encoding primary store, mirroring the orchestrator default.
///
/// Text persists as a JSON string, sequences as a JSON array. Tables and
/// other structured values are not inline-able; the gate externalizes them
/// before they ever reach this store.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonPrimaryStore;

impl PrimaryStore for JsonPrimaryStore {
    fn base_serialize(&self, value: &ExchangeValue) -> Result<PrimaryStoreValue, PrimaryStoreError> {
        let bytes = match value {
            ExchangeValue::Text(s) => serde_json::to_vec(s),
            ExchangeValue::Sequence(items) => serde_json::to_vec(items),
            other => {
                return Err(PrimaryStoreError::UnsupportedValue {
                    kind: other.kind(),
                })
            }
        };
        bytes
            .map(PrimaryStoreValue::new)
            .map_err(|e| PrimaryStoreError::Serialization(e.to_string()))
    }

    fn base_deserialize(
        &self,
        stored: &PrimaryStoreValue,
    ) -> Result<ExchangeValue, PrimaryStoreError> {
        let json: Json = serde_json::from_slice(stored.as_bytes())
            .map_err(|e| PrimaryStoreError::Serialization(e.to_string()))?;
        Ok(match json {
            Json::String(s) => ExchangeValue::Text(s),
            Json::Array(items) => ExchangeValue::Sequence(items),
            other => ExchangeValue::Structured(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_roundtrip() {
        let store = JsonPrimaryStore;
        let value = ExchangeValue::Text("hello".into());
        let stored = store.base_serialize(&value).unwrap();
        assert_eq!(stored.as_bytes(), br#""hello""#);
        assert_eq!(store.base_deserialize(&stored).unwrap(), value);
    }

    #[test]
    fn sequence_roundtrip() {
        let store = JsonPrimaryStore;
        let value = ExchangeValue::Sequence(vec![json!("x"), json!(2)]);
        let stored = store.base_serialize(&value).unwrap();
        assert_eq!(store.base_deserialize(&stored).unwrap(), value);
    }

    #[test]
    fn structured_values_are_refused() {
        let store = JsonPrimaryStore;
        let err = store
            .base_serialize(&ExchangeValue::Structured(json!({"k": 1})))
            .unwrap_err();
        assert!(matches!(
            err,
            PrimaryStoreError::UnsupportedValue { kind: "structured" }
        ));
    }

    #[test]
    fn malformed_bytes_fail_deserialize() {
        let store = JsonPrimaryStore;
        let err = store
            .base_deserialize(&PrimaryStoreValue::new(b"{broken".to_vec()))
            .unwrap_err();
        assert!(matches!(err, PrimaryStoreError::Serialization(_)));
    }
}
