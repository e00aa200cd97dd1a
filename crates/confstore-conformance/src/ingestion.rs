//! Typed ingestion check
//!
//! Stores one resource of each well-known example kind and reads it back.
//! Each kind is reported independently.

use crate::reports::{CheckOutcome, TestCategory, TestResult};
use crate::samples::{self, ExampleCase, EXAMPLE_NAME};
use confstore_store::ConfigStore;
use confstore_types::Resource;
use std::time::Instant;

/// Ingest every example kind into `namespace`
pub async fn check_typed_ingestion(store: &dyn ConfigStore, namespace: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    for case in samples::example_cases() {
        outcome.push(ingest_example(store, namespace, case).await);
    }
    tracing::info!(namespace, "ingested example kinds");
    outcome
}

async fn ingest_example(store: &dyn ConfigStore, namespace: &str, case: ExampleCase) -> TestResult {
    let start = Instant::now();
    let name = format!("ingest/{}", case.name);
    let kind = case.schema.kind;

    let Some(scope) = store.registry().find_scope_by_kind(&kind) else {
        return TestResult::failed(
            name,
            TestCategory::TypedIngestion,
            format!("{} is not registered", kind),
            start.elapsed(),
        );
    };

    // cluster-scoped kinds are created without a namespace
    let resource_namespace = if scope.is_cluster_scoped() { "" } else { namespace };
    let resource = Resource::new(kind.clone(), resource_namespace, EXAMPLE_NAME, case.spec);

    let mut errors = Vec::new();
    if let Err(e) = store.create(resource).await {
        errors.push(format!("create failed: {}", e));
    }
    if store.list(&kind, namespace).await.is_empty() {
        errors.push("expected non-zero number of resources".to_string());
    }
    if store.get(&kind, EXAMPLE_NAME, namespace).await.is_none() {
        errors.push("expected to find stored resource".to_string());
    }

    TestResult::from_errors(name, TestCategory::TypedIngestion, errors, start.elapsed())
        .with_detail("scope", scope.to_string())
}
