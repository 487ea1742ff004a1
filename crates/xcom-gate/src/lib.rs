//! Value exchange gate for XCom offloading.
//!
//! The orchestrator's metadata store is built for small native values; task
//! outputs like dataframes do not belong there. This crate overrides the
//! value-passing boundary: [`ExchangeGate::serialize`] intercepts every
//! inter-task value and either passes it through to the primary store
//! unchanged or moves it to object storage, leaving an opaque
//! `xcom_s3://...` reference behind. [`ExchangeGate::deserialize`] detects
//! such references and reconstitutes the original value, dispatching on the
//! stored key's extension.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use xcom_gate::ExchangeGate;
//! use xcom_store::{InMemoryBlobStorage, ObjectStoreClient, StoreConfig};
//! use xcom_types::ExchangeValue;
//!
//! let client = ObjectStoreClient::new(
//!     Arc::new(InMemoryBlobStorage::new()),
//!     StoreConfig::with_bucket("task-values"),
//! );
//! let gate = ExchangeGate::with_json_primary(client);
//!
//! let stored = gate.serialize(&ExchangeValue::Text("hello".into())).unwrap();
//! assert_eq!(gate.deserialize(&stored).unwrap(), ExchangeValue::Text("hello".into()));
//! ```

pub mod error;
pub mod gate;
pub mod primary;

// Re-exports for convenience.
pub use error::{ExchangeError, ExchangeResult};
pub use gate::ExchangeGate;
pub use primary::{JsonPrimaryStore, PrimaryStore, PrimaryStoreError, PrimaryStoreValue};
