//! Conformance error types

use thiserror::Error;

/// Errors raised before any check runs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConformanceError {
    #[error("Invalid conformance config: {0}")]
    InvalidConfig(String),
}

pub type ConformanceResult<T> = std::result::Result<T, ConformanceError>;
