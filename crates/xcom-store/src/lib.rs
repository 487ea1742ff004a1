//! Object store client for externalized task values.
//!
//! Externalized values live in a key-addressed blob store reachable through
//! a named connection. This crate wraps that service behind a narrow,
//! synchronous interface:
//!
//! - [`BlobStorage`] -- the external service contract: upload a local file
//!   to `bucket/key`, download `bucket/key` into a local directory
//! - [`ObjectStoreClient`] -- threads the configured bucket through every
//!   call and owns download staging, returning [`StagedObject`] guards that
//!   clean up after themselves
//! - [`StoreConfig`] -- the single configuration knob (destination bucket),
//!   read from the environment once at process startup
//!
//! # Backends
//!
//! - [`InMemoryBlobStorage`] -- `HashMap`-based backend for tests and
//!   embedding
//! - [`FsBlobStorage`] -- directory-per-bucket backend for local
//!   deployments
//!
//! # Design rules
//!
//! 1. Calls are blocking; a caller needing concurrency runs parallel task
//!    executions, not internal asynchrony.
//! 2. No retry and no timeout here: failures surface as
//!    [`StoreError::Unavailable`] and the calling orchestration layer owns
//!    retry/backoff.
//! 3. Staging paths are private to the call that created them and are
//!    removed on drop, on every exit path.
//! 4. Stored objects outlive the pipeline run that created them; no
//!    garbage collection is performed here. Retention belongs to the
//!    deployment (e.g. a bucket lifecycle rule).

pub mod client;
pub mod config;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use client::{ObjectStoreClient, StagedObject};
pub use config::{StoreConfig, BUCKET_ENV_VAR, DEFAULT_BUCKET};
pub use error::{StoreError, StoreResult};
pub use fs::FsBlobStorage;
pub use memory::InMemoryBlobStorage;
pub use traits::BlobStorage;
