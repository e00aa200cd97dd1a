//! In-memory implementation of the store contract
//!
//! Suitable for development and testing. Versions come from a store-wide
//! counter, so a token is never handed out twice.

use crate::error::{StoreError, StoreResult};
use crate::store::ConfigStore;
use async_trait::async_trait;
use confstore_registry::{collections, RegistryError, ResourceRegistry};
use confstore_types::{GroupVersionKind, Resource, ResourceKey, ResourceVersion, Scope};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory configuration store
pub struct InMemoryConfigStore {
    registry: ResourceRegistry,
    resources: DashMap<ResourceKey, Resource>,
    revision: AtomicU64,
}

impl InMemoryConfigStore {
    /// Store accepting every built-in kind
    pub fn new() -> Self {
        Self::with_registry(collections::all())
    }

    pub fn with_registry(registry: ResourceRegistry) -> Self {
        Self {
            registry,
            resources: DashMap::new(),
            revision: AtomicU64::new(0),
        }
    }

    /// Number of live resources across all kinds
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn next_version(&self) -> ResourceVersion {
        let rev = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        ResourceVersion::new(rev.to_string())
    }

    /// Validate a resource for writing and compute its storage key
    fn resolve(&self, resource: &Resource) -> StoreResult<(ResourceKey, Scope)> {
        if resource.kind().is_empty() {
            return Err(StoreError::InvalidIdentity("kind is required".into()));
        }
        let spec = resource.spec.as_ref().ok_or(StoreError::MissingSpec)?;
        let scope = self.registry.validate(resource.kind(), spec)?;

        if resource.name().is_empty() {
            return Err(StoreError::InvalidIdentity("name is required".into()));
        }

        let key = match scope {
            Scope::Cluster => resource.key().without_namespace(),
            Scope::Namespaced if resource.namespace().is_empty() => {
                return Err(StoreError::InvalidIdentity(format!(
                    "namespace is required for {}",
                    resource.kind()
                )));
            }
            Scope::Namespaced => resource.key(),
        };
        Ok((key, scope))
    }

    /// Storage key for a read or delete, or `None` for an unknown kind
    fn lookup_key(&self, kind: &GroupVersionKind, name: &str, namespace: &str) -> Option<ResourceKey> {
        let key = ResourceKey::new(kind.clone(), namespace, name);
        match self.registry.find_scope_by_kind(kind)? {
            Scope::Cluster => Some(key.without_namespace()),
            Scope::Namespaced => Some(key),
        }
    }
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    async fn create(&self, resource: Resource) -> StoreResult<Resource> {
        let (key, scope) = self.resolve(&resource)?;

        match self.resources.entry(key) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                let mut stored = resource;
                if scope.is_cluster_scoped() {
                    stored.meta.namespace.clear();
                }
                stored.meta.version = self.next_version();
                stored.meta.created_at = Some(chrono::Utc::now());

                tracing::debug!(key = %entry.key(), version = %stored.meta.version, "created resource");
                entry.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn update(&self, resource: Resource) -> StoreResult<Resource> {
        let (key, scope) = self.resolve(&resource)?;

        match self.resources.entry(key) {
            Entry::Vacant(entry) => Err(StoreError::NotFound(entry.key().clone())),
            Entry::Occupied(mut entry) => {
                let current = entry.get();
                if !resource.version().is_empty() && current.version() != resource.version() {
                    return Err(StoreError::VersionConflict {
                        current: current.version().clone(),
                        expected: resource.version().clone(),
                    });
                }

                let mut stored = resource;
                if scope.is_cluster_scoped() {
                    stored.meta.namespace.clear();
                }
                stored.meta.created_at = current.meta.created_at;
                stored.meta.version = self.next_version();

                tracing::debug!(key = %entry.key(), version = %stored.meta.version, "updated resource");
                entry.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn get(&self, kind: &GroupVersionKind, name: &str, namespace: &str) -> Option<Resource> {
        let key = self.lookup_key(kind, name, namespace)?;
        self.resources.get(&key).map(|r| r.clone())
    }

    async fn list(&self, kind: &GroupVersionKind, namespace: &str) -> Vec<Resource> {
        let cluster_scoped = match self.registry.find_scope_by_kind(kind) {
            Some(scope) => scope.is_cluster_scoped(),
            None => return Vec::new(),
        };

        let mut result: Vec<Resource> = self
            .resources
            .iter()
            .filter(|r| r.key().kind == *kind)
            .filter(|r| cluster_scoped || r.key().namespace == namespace)
            .map(|r| r.value().clone())
            .collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        result
    }

    async fn delete(
        &self,
        kind: &GroupVersionKind,
        name: &str,
        namespace: &str,
        version: Option<&ResourceVersion>,
    ) -> StoreResult<()> {
        let key = self
            .lookup_key(kind, name, namespace)
            .ok_or_else(|| RegistryError::UnknownKind(kind.clone()))?;

        match self.resources.entry(key) {
            Entry::Vacant(entry) => Err(StoreError::NotFound(entry.key().clone())),
            Entry::Occupied(entry) => {
                if let Some(expected) = version {
                    let current = entry.get().version();
                    if current != expected {
                        return Err(StoreError::VersionConflict {
                            current: current.clone(),
                            expected: expected.clone(),
                        });
                    }
                }
                tracing::debug!(key = %entry.key(), "deleted resource");
                entry.remove();
                Ok(())
            }
        }
    }
}
