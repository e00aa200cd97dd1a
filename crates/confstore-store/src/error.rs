//! Store error types

use confstore_registry::RegistryError;
use confstore_types::{ResourceKey, ResourceVersion};
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Resource already exists: {0}")]
    AlreadyExists(ResourceKey),

    #[error("Resource not found: {0}")]
    NotFound(ResourceKey),

    #[error("Version conflict: current {current}, expected {expected}")]
    VersionConflict {
        current: ResourceVersion,
        expected: ResourceVersion,
    },

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Resource has no spec")]
    MissingSpec,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Backend failure unrelated to the request, e.g. a lost connection.
    /// The in-memory store never raises it.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
