//! CLI error types

use confstore_conformance::ConformanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Conformance(#[from] ConformanceError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store '{store}' is not conformant: {failed} check(s) failed")]
    NotConformant { store: String, failed: usize },
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
