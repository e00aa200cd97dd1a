//! Conformance test reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

/// Test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Test category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestCategory {
    /// Store is configured with the kinds the checks need
    Precondition,
    /// Bulk creation and read-back
    Crud,
    /// Malformed or absent resources are refused
    Rejection,
    /// Absent identities and foreign namespaces read as empty
    Isolation,
    /// Deletes succeed and are observable
    Deletion,
    /// Well-known example kinds can be stored and read
    TypedIngestion,
}

impl TestCategory {
    /// All categories in report order
    pub fn all() -> &'static [TestCategory] {
        &[
            TestCategory::Precondition,
            TestCategory::Crud,
            TestCategory::Rejection,
            TestCategory::Isolation,
            TestCategory::Deletion,
            TestCategory::TypedIngestion,
        ]
    }
}

impl std::fmt::Display for TestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestCategory::Precondition => write!(f, "Precondition"),
            TestCategory::Crud => write!(f, "CRUD"),
            TestCategory::Rejection => write!(f, "Rejection"),
            TestCategory::Isolation => write!(f, "Isolation"),
            TestCategory::Deletion => write!(f, "Deletion"),
            TestCategory::TypedIngestion => write!(f, "Typed Ingestion"),
        }
    }
}

/// Individual test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub category: TestCategory,
    pub status: TestStatus,
    pub duration: Duration,
    pub error: Option<String>,
    pub details: HashMap<String, String>,
}

impl TestResult {
    /// Create a passed test result
    pub fn passed(name: impl Into<String>, category: TestCategory, duration: Duration) -> Self {
        Self {
            name: name.into(),
            category,
            status: TestStatus::Passed,
            duration,
            error: None,
            details: HashMap::new(),
        }
    }

    /// Create a failed test result
    pub fn failed(
        name: impl Into<String>,
        category: TestCategory,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        let result = Self {
            name: name.into(),
            category,
            status: TestStatus::Failed,
            duration,
            error: Some(error.into()),
            details: HashMap::new(),
        };
        tracing::warn!(
            test = %result.name,
            category = %category,
            error = result.error.as_deref().unwrap_or_default(),
            "conformance check failed"
        );
        result
    }

    /// Create a skipped test result
    pub fn skipped(
        name: impl Into<String>,
        category: TestCategory,
        reason: impl Into<String>,
    ) -> Self {
        let mut result = Self {
            name: name.into(),
            category,
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            error: None,
            details: HashMap::new(),
        };
        result.add_detail("reason", reason);
        result
    }

    /// Pass when `errors` is empty, otherwise fail with all errors joined
    pub fn from_errors(
        name: impl Into<String>,
        category: TestCategory,
        errors: Vec<String>,
        duration: Duration,
    ) -> Self {
        if errors.is_empty() {
            Self::passed(name, category, duration)
        } else {
            Self::failed(name, category, errors.join("; "), duration)
        }
    }

    /// Add a detail to the result
    pub fn add_detail(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.details.insert(key.into(), value.into());
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_detail(key, value);
        self
    }

    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed
    }
}

/// Results of one top-level check
#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    pub results: Vec<TestResult>,
    /// A precondition failed and the remaining steps did not run
    pub aborted: bool,
}

impl CheckOutcome {
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn failures(&self) -> Vec<&TestResult> {
        self.results.iter().filter(|r| r.is_failed()).collect()
    }

    pub fn all_passed(&self) -> bool {
        !self.aborted && self.results.iter().all(|r| !r.is_failed())
    }
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub conformant: bool,
}

/// Complete conformance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub run_id: Uuid,
    pub store_name: String,
    pub timestamp: DateTime<Utc>,
    pub duration: Duration,
    pub aborted: bool,
    pub results: HashMap<TestCategory, Vec<TestResult>>,
    pub summary: ReportSummary,
}

impl ConformanceReport {
    /// Create a new report
    pub fn new(store_name: String) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            store_name,
            timestamp: Utc::now(),
            duration: Duration::ZERO,
            aborted: false,
            results: HashMap::new(),
            summary: ReportSummary::default(),
        }
    }

    /// Add the results of a check, grouped by category
    pub fn add_outcome(&mut self, outcome: CheckOutcome) {
        self.aborted |= outcome.aborted;
        for result in outcome.results {
            self.results.entry(result.category).or_default().push(result);
        }
    }

    /// Finalize the report and compute summary
    pub fn finalize(&mut self) {
        let mut total = 0;
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for results in self.results.values() {
            for result in results {
                total += 1;
                match result.status {
                    TestStatus::Passed => passed += 1,
                    TestStatus::Failed => failed += 1,
                    TestStatus::Skipped => skipped += 1,
                }
            }
        }

        self.summary = ReportSummary {
            total,
            passed,
            failed,
            skipped,
            conformant: failed == 0 && !self.aborted,
        };
    }

    /// Get passed count
    pub fn passed_count(&self) -> usize {
        self.summary.passed
    }

    /// Get failed count
    pub fn failed_count(&self) -> usize {
        self.summary.failed
    }

    /// Get skipped count
    pub fn skipped_count(&self) -> usize {
        self.summary.skipped
    }

    /// Check if conformant
    pub fn is_conformant(&self) -> bool {
        self.summary.conformant
    }

    /// All failed results in report order
    pub fn failures(&self) -> Vec<&TestResult> {
        TestCategory::all()
            .iter()
            .filter_map(|c| self.results.get(c))
            .flatten()
            .filter(|r| r.is_failed())
            .collect()
    }

    /// Find a result by name
    pub fn result(&self, name: &str) -> Option<&TestResult> {
        self.results.values().flatten().find(|r| r.name == name)
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("╔════════════════════════════════════════════════════════════╗\n");
        output.push_str("║  Configuration Store Conformance Report                    ║\n");
        output.push_str("╠════════════════════════════════════════════════════════════╣\n");
        output.push_str(&format!("║  Store: {:<50} ║\n", self.store_name));
        output.push_str(&format!(
            "║  Timestamp: {:<46} ║\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            "║  Duration: {:<47} ║\n",
            format!("{:?}", self.duration)
        ));
        output.push_str("╠════════════════════════════════════════════════════════════╣\n");

        for category in TestCategory::all() {
            let Some(results) = self.results.get(category) else {
                continue;
            };
            output.push_str(&format!("║  {} Tests:\n", category));
            output.push_str("╟────────────────────────────────────────────────────────────╢\n");

            for result in results {
                let status_icon = match result.status {
                    TestStatus::Passed => "✓",
                    TestStatus::Failed => "✗",
                    TestStatus::Skipped => "○",
                };

                output.push_str(&format!(
                    "║  {} {:<45} {:>8?}\n",
                    status_icon, result.name, result.duration
                ));

                if let Some(error) = &result.error {
                    output.push_str(&format!("║      Error: {}\n", error));
                }
                if let Some(reason) = result.details.get("reason") {
                    output.push_str(&format!("║      Skipped: {}\n", reason));
                }
            }

            output.push_str("╟────────────────────────────────────────────────────────────╢\n");
        }

        output.push_str("╠════════════════════════════════════════════════════════════╣\n");
        output.push_str("║  Summary:                                                  ║\n");
        output.push_str(&format!(
            "║    Total: {:<5}  Passed: {:<5}  Failed: {:<5}  Skipped: {:<3} ║\n",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.skipped
        ));
        output.push_str("║                                                            ║\n");

        if self.summary.conformant {
            output.push_str("║  Result: ✓ CONFORMANT                                      ║\n");
        } else if self.aborted {
            output.push_str("║  Result: ✗ ABORTED (precondition failed)                   ║\n");
        } else {
            output.push_str("║  Result: ✗ NON-CONFORMANT                                  ║\n");
        }

        output.push_str("╚════════════════════════════════════════════════════════════╝\n");

        output
    }

    /// Generate JSON report
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_result_passed() {
        let result = TestResult::passed("create", TestCategory::Crud, Duration::from_millis(1));
        assert_eq!(result.status, TestStatus::Passed);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_test_result_failed() {
        let result = TestResult::failed(
            "create",
            TestCategory::Crud,
            "error message",
            Duration::from_millis(1),
        );
        assert_eq!(result.status, TestStatus::Failed);
        assert_eq!(result.error.as_deref(), Some("error message"));
    }

    #[test]
    fn test_from_errors_joins_messages() {
        let ok = TestResult::from_errors("x", TestCategory::Crud, vec![], Duration::ZERO);
        assert_eq!(ok.status, TestStatus::Passed);

        let bad = TestResult::from_errors(
            "x",
            TestCategory::Crud,
            vec!["a".into(), "b".into()],
            Duration::ZERO,
        );
        assert_eq!(bad.error.as_deref(), Some("a; b"));
    }

    #[test]
    fn test_report_finalize() {
        let mut report = ConformanceReport::new("test".to_string());
        report.add_outcome(CheckOutcome {
            results: vec![
                TestResult::passed("test1", TestCategory::Crud, Duration::ZERO),
                TestResult::failed("test2", TestCategory::Rejection, "error", Duration::ZERO),
                TestResult::skipped("test3", TestCategory::Deletion, "reason"),
            ],
            aborted: false,
        });
        report.finalize();

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.skipped, 1);
        assert!(!report.is_conformant());
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn test_aborted_report_is_not_conformant() {
        let mut report = ConformanceReport::new("test".to_string());
        report.add_outcome(CheckOutcome {
            results: vec![TestResult::skipped("rest", TestCategory::Crud, "aborted")],
            aborted: true,
        });
        report.finalize();

        assert_eq!(report.failed_count(), 0);
        assert!(!report.is_conformant());
        assert!(report.to_text().contains("ABORTED"));
    }

    #[test]
    fn test_report_to_text() {
        let mut report = ConformanceReport::new("memory".to_string());
        report.add_outcome(CheckOutcome {
            results: vec![TestResult::passed(
                "create/mock-config0",
                TestCategory::Crud,
                Duration::from_millis(10),
            )],
            aborted: false,
        });
        report.finalize();

        let text = report.to_text();
        assert!(text.contains("memory"));
        assert!(text.contains("create/mock-config0"));
        assert!(text.contains("CONFORMANT"));
    }

    #[test]
    fn test_report_to_json() {
        let mut report = ConformanceReport::new("memory".to_string());
        report.finalize();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["store_name"], "memory");
        assert_eq!(json["summary"]["conformant"], true);
    }
}
