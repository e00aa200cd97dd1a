use confstore_registry::collections;
use confstore_store::{ConfigStore, InMemoryConfigStore, StoreError};
use confstore_types::{MockConfig, Resource, Spec};
use std::collections::HashSet;
use std::sync::Arc;

fn mock(namespace: &str, name: &str) -> Resource {
    Resource::new(
        collections::mock_kind(),
        namespace,
        name,
        Spec::Mock(MockConfig {
            key: name.to_string(),
            pairs: vec![],
        }),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_versions() {
    let store = Arc::new(InMemoryConfigStore::new());

    let mut handles = Vec::new();
    for i in 0..64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(mock("ns1", &format!("r{}", i))).await
        }));
    }

    let mut versions = HashSet::new();
    for handle in handles {
        let stored = handle.await.unwrap().expect("create should succeed");
        assert!(versions.insert(stored.version().clone()), "version reused");
    }
    assert_eq!(store.list(&collections::mock_kind(), "ns1").await.len(), 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_creates_admit_exactly_one() {
    let store = Arc::new(InMemoryConfigStore::new());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.create(mock("ns1", "same")).await }));
    }

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(StoreError::AlreadyExists(_)) => rejected += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(rejected, 15);
}

#[tokio::test]
async fn version_changes_on_every_update() {
    let store = InMemoryConfigStore::new();
    let mut current = store.create(mock("ns1", "a")).await.unwrap();

    let mut seen = HashSet::new();
    seen.insert(current.version().clone());
    for i in 0..10 {
        current = store
            .update(current.with_label("iteration", i.to_string()))
            .await
            .unwrap();
        assert!(seen.insert(current.version().clone()), "version reused");
    }
}
