//! Confstore Registry - Kind registry
//!
//! The registry answers two questions for a store:
//!
//! - **Scope**: is a kind cluster-scoped or namespace-scoped?
//! - **Shape**: does a resource's payload match the shape its kind declares?
//!
//! [`collections`] holds the built-in kinds: the dedicated test kind used by
//! the conformance harness and five well-known example kinds.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod collections;
pub mod error;
pub mod schema;

// Re-exports
pub use error::{RegistryError, Result};
pub use schema::{KindSchema, RegistryBuilder, ResourceRegistry};
