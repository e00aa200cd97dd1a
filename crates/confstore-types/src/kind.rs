//! Kind identifiers and scoping rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the schema of a resource.
///
/// Displayed as `group/version/Kind`. The triple is compared by value only;
/// no component is ever parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// True for the zero-value kind carried by an empty resource.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.kind.is_empty()
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.kind)
    }
}

/// Whether a kind's identity includes a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Identity is `(kind, name)`; any namespace argument is ignored
    Cluster,
    /// Identity is `(kind, namespace, name)`; namespace must be non-empty
    Namespaced,
}

impl Scope {
    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, Scope::Cluster)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Cluster => write!(f, "cluster"),
            Scope::Namespaced => write!(f, "namespaced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gvk_display() {
        let gvk = GroupVersionKind::new("test.confstore.io", "v1", "MockConfig");
        assert_eq!(gvk.to_string(), "test.confstore.io/v1/MockConfig");
    }

    #[test]
    fn test_gvk_default_is_empty() {
        assert!(GroupVersionKind::default().is_empty());
        assert!(!GroupVersionKind::new("", "", "Gateway").is_empty());
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&Scope::Cluster).unwrap();
        assert_eq!(json, "\"cluster\"");
        let scope: Scope = serde_json::from_str("\"namespaced\"").unwrap();
        assert!(!scope.is_cluster_scoped());
    }
}
