//! Stored resources and their identity
//!
//! A [`Resource`] is the unit a configuration store persists. Its
//! [`ResourceMeta`] carries the identity triple, labels, annotations and the
//! two store-assigned fields: the version token and the creation timestamp.

use crate::{GroupVersionKind, Spec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque optimistic-concurrency token.
///
/// Assigned by the store on every successful write. Callers must only
/// compare tokens for equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceVersion(String);

impl ResourceVersion {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no version has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceVersion {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// The `(kind, namespace, name)` identity of a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceKey {
    pub kind: GroupVersionKind,
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(
        kind: GroupVersionKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Drop the namespace component, as cluster-scoped kinds require
    pub fn without_namespace(mut self) -> Self {
        self.namespace.clear();
        self
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{} {}", self.kind, self.name)
        } else {
            write!(f, "{} {}/{}", self.kind, self.namespace, self.name)
        }
    }
}

/// Resource metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMeta {
    /// Schema of the resource
    pub kind: GroupVersionKind,

    /// Name, unique within `(kind, namespace)`
    pub name: String,

    /// Namespace; empty for cluster-scoped kinds
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default)]
    pub labels: HashMap<String, String>,

    #[serde(default)]
    pub annotations: HashMap<String, String>,

    /// Store-assigned version token; empty before creation
    #[serde(default)]
    pub version: ResourceVersion,

    /// Store-assigned creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A typed configuration resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub meta: ResourceMeta,

    /// Typed payload; `None` only on the zero-value resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Spec>,
}

impl Resource {
    /// Create a resource with no labels, annotations or store-assigned fields
    pub fn new(
        kind: GroupVersionKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        spec: Spec,
    ) -> Self {
        Self {
            meta: ResourceMeta {
                kind,
                name: name.into(),
                namespace: namespace.into(),
                ..Default::default()
            },
            spec: Some(spec),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.annotations.insert(key.into(), value.into());
        self
    }

    pub fn with_version(mut self, version: ResourceVersion) -> Self {
        self.meta.version = version;
        self
    }

    pub fn kind(&self) -> &GroupVersionKind {
        &self.meta.kind
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn namespace(&self) -> &str {
        &self.meta.namespace
    }

    pub fn version(&self) -> &ResourceVersion {
        &self.meta.version
    }

    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(
            self.meta.kind.clone(),
            self.meta.namespace.clone(),
            self.meta.name.clone(),
        )
    }
}
