use tracing::debug;
use xcom_codec::{classify, decode_file, encode_to_file, Disposition, WireFormat};
use xcom_store::ObjectStoreClient;
use xcom_types::{decode_reference, encode_reference, ExchangeValue, ObjectKey};

use crate::error::ExchangeResult;
use crate::primary::{JsonPrimaryStore, PrimaryStore, PrimaryStoreValue};

/// The value exchange gate: the `serialize`/`deserialize` pair the
/// orchestrator's value-passing mechanism calls on every inter-task value.
///
/// On write it decides externalize-vs-inline; on read it detects reference
/// strings and reconstitutes the original value. The gate holds no state of
/// its own between calls -- object keys are generated per call and every
/// staging path is private to the call that created it, so concurrent use
/// from parallel task executions needs no coordination. The object-storage
/// entry is the only durable side effect, and it outlives the run.
pub struct ExchangeGate {
    store: ObjectStoreClient,
    primary: Box<dyn PrimaryStore>,
}

impl ExchangeGate {
    /// Create a gate over the given object store client and primary store.
    pub fn new(store: ObjectStoreClient, primary: Box<dyn PrimaryStore>) -> Self {
        Self { store, primary }
    }

    /// Create a gate with the default JSON primary store.
    pub fn with_json_primary(store: ObjectStoreClient) -> Self {
        Self::new(store, Box::new(JsonPrimaryStore))
    }

    /// The underlying object store client.
    pub fn store(&self) -> &ObjectStoreClient {
        &self.store
    }

    /// Prepare a task's output value for the primary store.
    ///
    /// Native values pass through unchanged. Externalized values are
    /// encoded into a private staging file, uploaded under a fresh key,
    /// and replaced by their reference string; the staging file is removed
    /// when this call returns, on every exit path.
    pub fn serialize(&self, value: &ExchangeValue) -> ExchangeResult<PrimaryStoreValue> {
        match classify(value) {
            Disposition::Inline => Ok(self.primary.base_serialize(value)?),
            Disposition::External(format) => {
                let key = ObjectKey::generate(format.extension());
                let staging = tempfile::tempdir()?;
                let local = staging.path().join(key.file_name());
                encode_to_file(value, format, &local)?;
                self.store.put(&local, &key)?;

                let reference = encode_reference(&key);
                debug!(key = %key, format = %format, "externalized task value");
                Ok(self
                    .primary
                    .base_serialize(&ExchangeValue::Text(reference))?)
            }
        }
    }

    /// Recover a task's input value from the primary store.
    ///
    /// Non-reference values return unchanged with no object-storage call.
    /// References are downloaded fresh on every read -- there is no cache
    /// -- and decoded by the codec their key's extension names.
    pub fn deserialize(&self, stored: &PrimaryStoreValue) -> ExchangeResult<ExchangeValue> {
        let candidate = self.primary.base_deserialize(stored)?;
        let key = match &candidate {
            ExchangeValue::Text(text) => decode_reference(text),
            _ => None,
        };
        let Some(key) = key else {
            return Ok(candidate);
        };

        let staged = self.store.get(&key)?;
        let format = WireFormat::for_key(&key)?;
        let value = decode_file(format, staged.path())?;
        debug!(key = %key, format = %format, "reconstituted externalized value");
        Ok(value)
    }
}

impl std::fmt::Debug for ExchangeGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeGate")
            .field("bucket", &self.store.bucket())
            .finish()
    }
}
