//! Confstore Conformance Test Suite
//!
//! Validates that a [`ConfigStore`](confstore_store::ConfigStore) backend
//! honors the store contract. Every check drives the store through its
//! public operations only and records findings as [`TestResult`]s instead
//! of panicking, so one report covers every violation.
//!
//! # Checks
//!
//! - **CRUD invariants**: bulk create, read-back, rejection of malformed
//!   resources, absence, deletion
//!   - requires the dedicated test kind to be registered; without it the
//!     remaining steps are skipped and the run is aborted
//!
//! - **Typed ingestion**: one resource of each well-known example kind is
//!   stored and read back, honoring cluster scope
//!
//! # Example
//!
//! ```rust,ignore
//! use confstore_conformance::{ConformanceConfig, ConformanceRunner};
//! use confstore_store::InMemoryConfigStore;
//! use std::sync::Arc;
//!
//! let runner = ConformanceRunner::new(ConformanceConfig::default());
//! let report = runner.run(Arc::new(InMemoryConfigStore::new())).await;
//! println!("{}", report.to_text());
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod compare;
pub mod crud;
pub mod error;
pub mod fixtures;
pub mod framework;
pub mod harness;
pub mod ingestion;
pub mod reports;
pub mod samples;

pub use crud::check_crud_invariants;
pub use error::{ConformanceError, ConformanceResult};
pub use framework::{ConformanceConfig, ConformanceRunner};
pub use harness::TestHarness;
pub use ingestion::check_typed_ingestion;
pub use reports::{
    CheckOutcome, ConformanceReport, ReportSummary, TestCategory, TestResult, TestStatus,
};
