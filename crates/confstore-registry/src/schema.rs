//! Kind schemas and the registry that indexes them

use crate::error::{RegistryError, Result};
use confstore_types::{GroupVersionKind, Scope, Spec, SpecKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Registration record for one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSchema {
    pub kind: GroupVersionKind,
    pub scope: Scope,
    /// Payload variant resources of this kind must carry
    pub payload: SpecKind,
}

impl KindSchema {
    pub fn namespaced(kind: GroupVersionKind, payload: SpecKind) -> Self {
        Self {
            kind,
            scope: Scope::Namespaced,
            payload,
        }
    }

    pub fn cluster(kind: GroupVersionKind, payload: SpecKind) -> Self {
        Self {
            kind,
            scope: Scope::Cluster,
            payload,
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.scope.is_cluster_scoped()
    }

    /// Check that a payload has the shape this kind declares
    pub fn validate(&self, spec: &Spec) -> Result<()> {
        let actual = spec.spec_kind();
        if actual != self.payload {
            return Err(RegistryError::SpecMismatch {
                kind: self.kind.clone(),
                expected: self.payload,
                actual,
            });
        }
        Ok(())
    }
}

/// Maps kinds to their scoping rule and payload shape
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    schemas: Vec<KindSchema>,
    index: HashMap<GroupVersionKind, usize>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Register a kind; each kind may be registered once
    pub fn register(&mut self, schema: KindSchema) -> Result<()> {
        if self.index.contains_key(&schema.kind) {
            return Err(RegistryError::DuplicateKind(schema.kind));
        }
        self.index.insert(schema.kind.clone(), self.schemas.len());
        self.schemas.push(schema);
        Ok(())
    }

    pub fn find_schema(&self, kind: &GroupVersionKind) -> Option<&KindSchema> {
        self.index.get(kind).map(|&i| &self.schemas[i])
    }

    /// Scoping rule of a kind, or `None` when the kind is not registered
    pub fn find_scope_by_kind(&self, kind: &GroupVersionKind) -> Option<Scope> {
        self.find_schema(kind).map(|s| s.scope)
    }

    pub fn contains(&self, kind: &GroupVersionKind) -> bool {
        self.index.contains_key(kind)
    }

    /// Resolve a kind and check the payload against it
    pub fn validate(&self, kind: &GroupVersionKind, spec: &Spec) -> Result<Scope> {
        let schema = self
            .find_schema(kind)
            .ok_or_else(|| RegistryError::UnknownKind(kind.clone()))?;
        schema.validate(spec)?;
        Ok(schema.scope)
    }

    /// Registered kinds in registration order
    pub fn kinds(&self) -> impl Iterator<Item = &GroupVersionKind> {
        self.schemas.iter().map(|s| &s.kind)
    }

    pub fn schemas(&self) -> &[KindSchema] {
        &self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Collecting keeps the last schema given for a kind
impl FromIterator<KindSchema> for ResourceRegistry {
    fn from_iter<I: IntoIterator<Item = KindSchema>>(iter: I) -> Self {
        let mut registry = ResourceRegistry::new();
        for schema in iter {
            match registry.index.get(&schema.kind) {
                Some(&i) => registry.schemas[i] = schema,
                None => {
                    registry.index.insert(schema.kind.clone(), registry.schemas.len());
                    registry.schemas.push(schema);
                }
            }
        }
        registry
    }
}

/// Builder for [`ResourceRegistry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    schemas: Vec<KindSchema>,
}

impl RegistryBuilder {
    pub fn with(mut self, schema: KindSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Leave out a kind that an earlier `with` added
    pub fn without(mut self, kind: &GroupVersionKind) -> Self {
        self.schemas.retain(|s| &s.kind != kind);
        self
    }

    pub fn build(self) -> Result<ResourceRegistry> {
        let mut registry = ResourceRegistry::new();
        for schema in self.schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confstore_types::{Gateway, MockConfig};

    fn mock_kind() -> GroupVersionKind {
        GroupVersionKind::new("test.confstore.io", "v1", "MockConfig")
    }

    fn gateway_kind() -> GroupVersionKind {
        GroupVersionKind::new("networking.confstore.io", "v1alpha3", "Gateway")
    }

    fn registry() -> ResourceRegistry {
        ResourceRegistry::builder()
            .with(KindSchema::namespaced(mock_kind(), SpecKind::Mock))
            .with(KindSchema::cluster(gateway_kind(), SpecKind::Gateway))
            .build()
            .unwrap()
    }

    #[test]
    fn test_find_scope_by_kind() {
        let registry = registry();
        assert_eq!(registry.find_scope_by_kind(&mock_kind()), Some(Scope::Namespaced));
        assert_eq!(registry.find_scope_by_kind(&gateway_kind()), Some(Scope::Cluster));
        assert_eq!(
            registry.find_scope_by_kind(&GroupVersionKind::new("x", "v1", "Nope")),
            None
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = registry();
        let err = registry
            .register(KindSchema::namespaced(mock_kind(), SpecKind::Mock))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKind(mock_kind()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_validate_spec_shape() {
        let registry = registry();
        let mock = Spec::Mock(MockConfig::default());
        let gateway = Spec::Gateway(Gateway::default());

        assert_eq!(registry.validate(&mock_kind(), &mock), Ok(Scope::Namespaced));
        assert!(matches!(
            registry.validate(&mock_kind(), &gateway),
            Err(RegistryError::SpecMismatch {
                expected: SpecKind::Mock,
                actual: SpecKind::Gateway,
                ..
            })
        ));
        assert!(matches!(
            registry.validate(&GroupVersionKind::default(), &mock),
            Err(RegistryError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_kinds_in_registration_order() {
        let registry = registry();
        let kinds: Vec<_> = registry.kinds().cloned().collect();
        assert_eq!(kinds, vec![mock_kind(), gateway_kind()]);
    }

    #[test]
    fn test_builder_without() {
        let registry = ResourceRegistry::builder()
            .with(KindSchema::namespaced(mock_kind(), SpecKind::Mock))
            .with(KindSchema::cluster(gateway_kind(), SpecKind::Gateway))
            .without(&mock_kind())
            .build()
            .unwrap();
        assert!(!registry.contains(&mock_kind()));
        assert!(registry.contains(&gateway_kind()));
    }

    #[test]
    fn test_collect_keeps_last_schema_per_kind() {
        let registry: ResourceRegistry = vec![
            KindSchema::namespaced(mock_kind(), SpecKind::Mock),
            KindSchema::cluster(gateway_kind(), SpecKind::Gateway),
            KindSchema::cluster(mock_kind(), SpecKind::Mock),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_scope_by_kind(&mock_kind()), Some(Scope::Cluster));
        let kinds: Vec<_> = registry.kinds().cloned().collect();
        assert_eq!(kinds, vec![mock_kind(), gateway_kind()]);
    }
}
