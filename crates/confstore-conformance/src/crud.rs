//! CRUD invariant check
//!
//! Drives an empty store through create, read-back, rejection, absence and
//! deletion for the dedicated test kind. Every store call is awaited before
//! the next one is issued. Only a missing test kind stops the check early;
//! every other failure is recorded and the sequence continues.
//!
//! The store must hold no test-kind resources in `namespace` (or in the
//! empty namespace) when the check starts.

use crate::compare::resources_equivalent;
use crate::fixtures;
use crate::reports::{CheckOutcome, TestCategory, TestResult};
use confstore_registry::collections;
use confstore_store::ConfigStore;
use confstore_types::{GroupVersionKind, MockConfig, Resource, ResourceVersion, Spec};
use std::collections::BTreeMap;
use std::time::Instant;

/// Steps reported as skipped when the precondition fails
const GATED_STEPS: &[(&str, TestCategory)] = &[
    ("create", TestCategory::Crud),
    ("read_back", TestCategory::Crud),
    ("reject", TestCategory::Rejection),
    ("absence", TestCategory::Isolation),
    ("delete", TestCategory::Deletion),
];

/// Run the full CRUD sequence with `n` fixtures in `namespace`
pub async fn check_crud_invariants(
    store: &dyn ConfigStore,
    namespace: &str,
    n: usize,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let kind = collections::mock_kind();

    let precondition = verify_kind_registered(store, &kind);
    let registered = !precondition.is_failed();
    outcome.push(precondition);
    if !registered {
        outcome.aborted = true;
        for (step, category) in GATED_STEPS {
            outcome.push(TestResult::skipped(
                *step,
                *category,
                format!("{} is not registered", kind),
            ));
        }
        return outcome;
    }

    let fixtures = fixtures::build(namespace, n);
    tracing::info!(count = n, namespace, "built fixtures");

    create_fixtures(store, &fixtures, &mut outcome).await;
    let versions = verify_fixtures(store, &kind, &fixtures, &mut outcome).await;

    let borrowed = versions.values().next().cloned().unwrap_or_default();
    verify_rejections(store, &kind, borrowed, &mut outcome).await;
    verify_absence(store, &kind, &mut outcome).await;

    delete_fixtures(store, &kind, namespace, n, &mut outcome).await;
    outcome
}

fn verify_kind_registered(store: &dyn ConfigStore, kind: &GroupVersionKind) -> TestResult {
    let start = Instant::now();
    match store.registry().find_scope_by_kind(kind) {
        Some(scope) => {
            tracing::info!(%kind, %scope, "test kind registered");
            TestResult::passed("kind_registered", TestCategory::Precondition, start.elapsed())
                .with_detail("scope", scope.to_string())
        }
        None => TestResult::failed(
            "kind_registered",
            TestCategory::Precondition,
            format!("expected {} to be registered", kind),
            start.elapsed(),
        ),
    }
}

async fn create_fixtures(
    store: &dyn ConfigStore,
    fixtures: &BTreeMap<usize, Resource>,
    outcome: &mut CheckOutcome,
) {
    for fixture in fixtures.values() {
        let start = Instant::now();
        let name = format!("create/{}", fixture.name());
        let result = match store.create(fixture.clone()).await {
            Ok(_) => TestResult::passed(name, TestCategory::Crud, start.elapsed()),
            Err(e) => TestResult::failed(name, TestCategory::Crud, e.to_string(), start.elapsed()),
        };
        outcome.push(result);
    }
    tracing::info!("created fixtures");
}

/// Read every fixture back; returns the versions the store assigned
async fn verify_fixtures(
    store: &dyn ConfigStore,
    kind: &GroupVersionKind,
    fixtures: &BTreeMap<usize, Resource>,
    outcome: &mut CheckOutcome,
) -> BTreeMap<usize, ResourceVersion> {
    let mut versions = BTreeMap::new();

    for (index, fixture) in fixtures {
        let start = Instant::now();
        let name = format!("read_back/{}", fixture.name());
        let stored = store.get(kind, fixture.name(), fixture.namespace()).await;

        let result = match stored {
            Some(stored) if resources_equivalent(fixture, &stored) => {
                versions.insert(*index, stored.version().clone());
                TestResult::passed(name, TestCategory::Crud, start.elapsed())
                    .with_detail("version", stored.version().as_str())
            }
            Some(stored) => TestResult::failed(
                name,
                TestCategory::Crud,
                format!("wanted {:?}, got {:?}", fixture, stored),
                start.elapsed(),
            ),
            None => TestResult::failed(
                name,
                TestCategory::Crud,
                format!("wanted {:?}, got nothing", fixture),
                start.elapsed(),
            ),
        };
        outcome.push(result);
    }

    tracing::info!(verified = versions.len(), "read back stored fixtures");
    versions
}

/// The three resources both create and update must refuse
fn rejection_cases(kind: &GroupVersionKind, borrowed: ResourceVersion) -> Vec<(&'static str, Resource)> {
    let invalid = Resource::new(kind.clone(), "", "invalid", Spec::Mock(MockConfig::default()))
        .with_version(borrowed.clone());

    let missing = Resource::new(
        kind.clone(),
        "",
        "missing",
        Spec::Mock(MockConfig {
            key: "missing".to_string(),
            pairs: vec![],
        }),
    )
    .with_version(borrowed);

    vec![
        ("empty", Resource::default()),
        ("invalid", invalid),
        ("missing", missing),
    ]
}

async fn verify_rejections(
    store: &dyn ConfigStore,
    kind: &GroupVersionKind,
    borrowed: ResourceVersion,
    outcome: &mut CheckOutcome,
) {
    for (case, resource) in rejection_cases(kind, borrowed) {
        let start = Instant::now();
        let name = format!("reject_create/{}", case);
        let result = match store.create(resource.clone()).await {
            Err(e) => TestResult::passed(name, TestCategory::Rejection, start.elapsed())
                .with_detail("error", e.to_string()),
            Ok(_) => TestResult::failed(
                name,
                TestCategory::Rejection,
                format!("expected error creating {} resource", case),
                start.elapsed(),
            ),
        };
        outcome.push(result);

        let start = Instant::now();
        let name = format!("reject_update/{}", case);
        let result = match store.update(resource).await {
            Err(e) => TestResult::passed(name, TestCategory::Rejection, start.elapsed())
                .with_detail("error", e.to_string()),
            Ok(_) => TestResult::failed(
                name,
                TestCategory::Rejection,
                format!("expected error updating {} resource", case),
                start.elapsed(),
            ),
        };
        outcome.push(result);
    }
    tracing::info!("verified rejection of invalid resources");
}

async fn verify_absence(store: &dyn ConfigStore, kind: &GroupVersionKind, outcome: &mut CheckOutcome) {
    let start = Instant::now();
    let listed = store.list(kind, "").await;
    outcome.push(if listed.is_empty() {
        TestResult::passed("isolated_list/unscoped", TestCategory::Isolation, start.elapsed())
    } else {
        TestResult::failed(
            "isolated_list/unscoped",
            TestCategory::Isolation,
            format!("unexpected resources listed outside their namespace: {}", names(&listed)),
            start.elapsed(),
        )
    });

    let start = Instant::now();
    outcome.push(match store.get(kind, "missing", "").await {
        None => TestResult::passed("absent_get/missing", TestCategory::Isolation, start.elapsed()),
        Some(found) => TestResult::failed(
            "absent_get/missing",
            TestCategory::Isolation,
            format!("unexpected resource found: {:?}", found),
            start.elapsed(),
        ),
    });
}

async fn delete_fixtures(
    store: &dyn ConfigStore,
    kind: &GroupVersionKind,
    namespace: &str,
    n: usize,
    outcome: &mut CheckOutcome,
) {
    for i in 0..n {
        let start = Instant::now();
        let fixture_name = fixtures::name(i);
        let name = format!("delete/{}", fixture_name);
        let result = match store.delete(kind, &fixture_name, namespace, None).await {
            Ok(()) => TestResult::passed(name, TestCategory::Deletion, start.elapsed()),
            Err(e) => TestResult::failed(name, TestCategory::Deletion, e.to_string(), start.elapsed()),
        };
        outcome.push(result);
    }
    tracing::info!("deleted fixtures");

    let start = Instant::now();
    let name = format!("deleted_list/{}", namespace);
    let remaining = store.list(kind, namespace).await;
    outcome.push(if remaining.is_empty() {
        TestResult::passed(name, TestCategory::Deletion, start.elapsed())
    } else {
        TestResult::failed(
            name,
            TestCategory::Deletion,
            format!(
                "wanted 0 resource(s), got {} in {}",
                remaining.len(),
                names(&remaining)
            ),
            start.elapsed(),
        )
    });
}

fn names(resources: &[Resource]) -> String {
    let names: Vec<_> = resources.iter().map(|r| r.key().to_string()).collect();
    format!("[{}]", names.join(", "))
}
