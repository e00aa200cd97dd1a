//! Store contract
//!
//! Absence is not an error: `get` returns `None` and `list` returns an empty
//! vector. Only mutations fail.

use crate::error::StoreResult;
use async_trait::async_trait;
use confstore_registry::ResourceRegistry;
use confstore_types::{GroupVersionKind, Resource, ResourceVersion};

/// A versioned, namespace-scoped configuration store
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Backend name shown in reports
    fn name(&self) -> &str {
        "config-store"
    }

    /// Kinds this store accepts
    fn registry(&self) -> &ResourceRegistry;

    /// Persist a new resource and return it with version and creation time set
    async fn create(&self, resource: Resource) -> StoreResult<Resource>;

    /// Replace an existing resource and return it with a new version.
    ///
    /// A non-empty version on the input is the version the caller believes
    /// is current.
    async fn update(&self, resource: Resource) -> StoreResult<Resource>;

    /// Get a resource by identity
    async fn get(&self, kind: &GroupVersionKind, name: &str, namespace: &str) -> Option<Resource>;

    /// List resources of a kind in a namespace
    async fn list(&self, kind: &GroupVersionKind, namespace: &str) -> Vec<Resource>;

    /// Delete a resource by identity, optionally only if its version matches
    async fn delete(
        &self,
        kind: &GroupVersionKind,
        name: &str,
        namespace: &str,
        version: Option<&ResourceVersion>,
    ) -> StoreResult<()>;
}
