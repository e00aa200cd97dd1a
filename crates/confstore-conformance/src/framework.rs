//! Conformance test framework

use crate::crud::check_crud_invariants;
use crate::error::{ConformanceError, ConformanceResult};
use crate::ingestion::check_typed_ingestion;
use crate::reports::ConformanceReport;
use confstore_store::ConfigStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Configuration for conformance testing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConformanceConfig {
    /// Namespace the CRUD check creates its fixtures in
    pub namespace: String,

    /// Number of fixtures the CRUD check creates
    pub fixture_count: usize,

    /// Namespace the typed ingestion check writes to
    pub ingestion_namespace: String,

    /// Run the CRUD invariant check
    pub run_crud: bool,

    /// Run the typed ingestion check
    pub run_typed_ingestion: bool,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            namespace: "ns1".to_string(),
            fixture_count: 5,
            ingestion_namespace: "ns2".to_string(),
            run_crud: true,
            run_typed_ingestion: true,
        }
    }
}

impl ConformanceConfig {
    pub fn validate(&self) -> ConformanceResult<()> {
        if self.namespace.is_empty() {
            return Err(ConformanceError::InvalidConfig(
                "namespace must not be empty".into(),
            ));
        }
        if self.ingestion_namespace.is_empty() {
            return Err(ConformanceError::InvalidConfig(
                "ingestion_namespace must not be empty".into(),
            ));
        }
        if self.run_crud && self.fixture_count == 0 {
            return Err(ConformanceError::InvalidConfig(
                "fixture_count must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Conformance test runner
pub struct ConformanceRunner {
    config: ConformanceConfig,
}

impl ConformanceRunner {
    /// Create a new conformance runner
    pub fn new(config: ConformanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConformanceConfig {
        &self.config
    }

    /// Run all enabled checks against a store
    pub async fn run(&self, store: Arc<dyn ConfigStore>) -> ConformanceReport {
        let start = Instant::now();
        let mut report = ConformanceReport::new(store.name().to_string());

        tracing::info!("Starting conformance tests for: {}", store.name());

        if self.config.run_crud {
            tracing::info!("Running CRUD invariant checks...");
            let outcome = check_crud_invariants(
                store.as_ref(),
                &self.config.namespace,
                self.config.fixture_count,
            )
            .await;
            if outcome.aborted {
                tracing::error!("CRUD checks aborted: test kind is not registered");
            }
            report.add_outcome(outcome);
        }

        if self.config.run_typed_ingestion {
            tracing::info!("Running typed ingestion checks...");
            let outcome =
                check_typed_ingestion(store.as_ref(), &self.config.ingestion_namespace).await;
            report.add_outcome(outcome);
        }

        report.duration = start.elapsed();
        report.finalize();

        tracing::info!(
            "Conformance tests complete: {} passed, {} failed, {} skipped",
            report.passed_count(),
            report.failed_count(),
            report.skipped_count()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ConformanceConfig::default();
        assert_eq!(config.namespace, "ns1");
        assert_eq!(config.fixture_count, 5);
        assert!(config.run_crud);
        assert!(config.run_typed_ingestion);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let empty_ns = ConformanceConfig {
            namespace: String::new(),
            ..Default::default()
        };
        assert!(empty_ns.validate().is_err());

        let no_fixtures = ConformanceConfig {
            fixture_count: 0,
            ..Default::default()
        };
        assert!(no_fixtures.validate().is_err());

        let ingestion_only = ConformanceConfig {
            fixture_count: 0,
            run_crud: false,
            ..Default::default()
        };
        assert!(ingestion_only.validate().is_ok());
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: ConformanceConfig =
            serde_json::from_str(r#"{"namespace": "team-a", "fixture_count": 9}"#).unwrap();
        assert_eq!(config.namespace, "team-a");
        assert_eq!(config.fixture_count, 9);
        assert_eq!(config.ingestion_namespace, "ns2");
    }
}
