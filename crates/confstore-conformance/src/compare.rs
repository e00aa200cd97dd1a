//! Equality relation used by the checks
//!
//! Two resources are equivalent when they are structurally equal after
//! the store-assigned version and creation time are cleared on both.

use confstore_types::{Resource, ResourceVersion};

/// Copy of `resource` with version and creation time cleared
pub fn without_store_fields(resource: &Resource) -> Resource {
    let mut stripped = resource.clone();
    stripped.meta.version = ResourceVersion::default();
    stripped.meta.created_at = None;
    stripped
}

/// Compare identity, labels, annotations and spec
pub fn resources_equivalent(a: &Resource, b: &Resource) -> bool {
    without_store_fields(a) == without_store_fields(b)
}
