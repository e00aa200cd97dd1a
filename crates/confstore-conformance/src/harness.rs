//! Test harness for running conformance tests

use crate::reports::ConformanceReport;
use crate::{ConformanceConfig, ConformanceRunner};
use confstore_store::ConfigStore;
use std::sync::Arc;

/// Test harness for conformance testing
pub struct TestHarness {
    runner: ConformanceRunner,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Self {
        Self {
            runner: ConformanceRunner::new(ConformanceConfig::default()),
        }
    }

    /// Create a test harness with custom configuration
    pub fn with_config(config: ConformanceConfig) -> Self {
        Self {
            runner: ConformanceRunner::new(config),
        }
    }

    /// Run conformance tests and return report
    pub async fn run(&self, store: Arc<dyn ConfigStore>) -> ConformanceReport {
        self.runner.run(store).await
    }

    /// Run tests and assert conformance
    pub async fn assert_conformant(&self, store: Arc<dyn ConfigStore>) {
        let report = self.runner.run(store).await;

        if !report.is_conformant() {
            panic!(
                "Store '{}' is not conformant:\n{}",
                report.store_name,
                report.to_text()
            );
        }
    }

    /// Run the suite against each store in turn.
    ///
    /// Stores are independent; each gets a fresh report.
    pub async fn run_all(&self, stores: Vec<Arc<dyn ConfigStore>>) -> Vec<ConformanceReport> {
        let mut reports = Vec::with_capacity(stores.len());
        for store in stores {
            reports.push(self.runner.run(store).await);
        }
        reports
    }

    /// Names of the stores in `reports` that did not conform
    pub fn non_conformant(reports: &[ConformanceReport]) -> Vec<&str> {
        reports
            .iter()
            .filter(|r| !r.is_conformant())
            .map(|r| r.store_name.as_str())
            .collect()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
