//! Confstore Store - Configuration store contract
//!
//! This crate defines [`ConfigStore`], the five-operation contract every
//! configuration store backend implements:
//!
//! - **create**: persist a new resource; the store assigns version and timestamp
//! - **update**: replace a resource, optionally guarded by its current version
//! - **get** / **list**: read by identity or by `(kind, namespace)`
//! - **delete**: remove by identity, optionally guarded by a version
//!
//! ## In-Memory vs Persistent
//!
//! [`InMemoryConfigStore`] is the reference implementation used to prove the
//! conformance harness. File-backed or remote stores implement the same trait
//! and are expected to behave identically under the harness.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod error;
pub mod memory;
pub mod store;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryConfigStore;
pub use store::ConfigStore;
