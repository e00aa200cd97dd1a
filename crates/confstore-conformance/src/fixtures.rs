//! Deterministic test fixtures
//!
//! Fixture `i` is named `mock-config{i}`, labelled and annotated with its own
//! name, and carries a `MockConfig` whose key is the name and whose single
//! pair records the index.

use confstore_registry::collections;
use confstore_types::{ConfigPair, MockConfig, Resource, Spec};
use std::collections::BTreeMap;

/// Prefix of every generated fixture name
pub const NAME_PREFIX: &str = "mock-config";

pub const LABEL_KEY: &str = "key";
pub const ANNOTATION_KEY: &str = "annotationkey";

/// Name of fixture `index`
pub fn name(index: usize) -> String {
    format!("{}{}", NAME_PREFIX, index)
}

/// Build the fixture for `index` in `namespace`
pub fn make(namespace: &str, index: usize) -> Resource {
    let name = name(index);
    let spec = Spec::Mock(MockConfig {
        key: name.clone(),
        pairs: vec![ConfigPair {
            key: "key".to_string(),
            value: index.to_string(),
        }],
    });

    Resource::new(collections::mock_kind(), namespace, name.clone(), spec)
        .with_label(LABEL_KEY, name.clone())
        .with_annotation(ANNOTATION_KEY, name)
}

/// Build `count` fixtures for `namespace`, keyed by index
pub fn build(namespace: &str, count: usize) -> BTreeMap<usize, Resource> {
    (0..count).map(|i| (i, make(namespace, i))).collect()
}
