//! The in-memory reference store passes every check

use confstore_conformance::{
    check_crud_invariants, check_typed_ingestion, fixtures, ConformanceConfig, TestCategory,
    TestHarness, TestStatus,
};
use confstore_registry::collections;
use confstore_store::{ConfigStore, InMemoryConfigStore};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_crud_invariants_pass() {
    init_tracing();
    let store = InMemoryConfigStore::new();
    let outcome = check_crud_invariants(&store, "ns1", 5).await;

    assert!(outcome.all_passed(), "failures: {:?}", outcome.failures());
    assert!(!outcome.aborted);
    // precondition, 5 creates, 5 reads, 6 rejections, 2 absence, 5 deletes, 1 list
    assert_eq!(outcome.results.len(), 25);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_fixtures_visible_before_delete() {
    let store = InMemoryConfigStore::new();
    for fixture in fixtures::build("ns1", 5).into_values() {
        store.create(fixture).await.unwrap();
    }

    let listed = store.list(&collections::mock_kind(), "ns1").await;
    assert_eq!(listed.len(), 5);
    assert!(store.list(&collections::mock_kind(), "").await.is_empty());
}

#[tokio::test]
async fn test_typed_ingestion_pass() {
    let store = InMemoryConfigStore::new();
    let outcome = check_typed_ingestion(&store, "ns2").await;

    assert!(outcome.all_passed(), "failures: {:?}", outcome.failures());
    assert_eq!(outcome.results.len(), 5);

    let gateway = collections::gateway_kind();
    assert!(store.get(&gateway, "example", "").await.is_some());
    assert!(store.get(&gateway, "example", "anywhere").await.is_some());
    assert_eq!(store.list(&gateway, "ns2").await.len(), 1);

    let route = collections::route_rule_kind();
    assert!(store.get(&route, "example", "ns2").await.is_some());
    assert!(store.get(&route, "example", "").await.is_none());
}

#[tokio::test]
async fn test_runner_report_is_conformant() {
    init_tracing();
    let harness = TestHarness::new();
    let report = harness.run(Arc::new(InMemoryConfigStore::new())).await;

    assert!(report.is_conformant(), "{}", report.to_text());
    assert_eq!(report.store_name, "in-memory");
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.skipped_count(), 0);
    assert_eq!(report.passed_count(), 30);
    assert_eq!(report.results[&TestCategory::TypedIngestion].len(), 5);

    let gateway = report.result("ingest/Gateway").unwrap();
    assert_eq!(gateway.status, TestStatus::Passed);
    assert_eq!(gateway.details.get("scope").map(String::as_str), Some("cluster"));
}

#[tokio::test]
async fn test_assert_conformant() {
    TestHarness::new()
        .assert_conformant(Arc::new(InMemoryConfigStore::new()))
        .await;
}

#[tokio::test]
async fn test_disabled_checks_do_not_run() {
    let config = ConformanceConfig {
        run_typed_ingestion: false,
        fixture_count: 2,
        ..Default::default()
    };
    let report = TestHarness::with_config(config)
        .run(Arc::new(InMemoryConfigStore::new()))
        .await;

    assert!(report.is_conformant());
    assert!(!report.results.contains_key(&TestCategory::TypedIngestion));
    assert_eq!(report.results[&TestCategory::Crud].len(), 4);
}

#[tokio::test]
async fn test_json_report() {
    let report = TestHarness::new()
        .run(Arc::new(InMemoryConfigStore::new()))
        .await;
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["conformant"], true);
    assert_eq!(value["store_name"], "in-memory");
}
