//! Registry error types

use confstore_types::{GroupVersionKind, SpecKind};
use thiserror::Error;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown kind: {0}")]
    UnknownKind(GroupVersionKind),

    #[error("Kind {kind} expects a {expected} payload, got {actual}")]
    SpecMismatch {
        kind: GroupVersionKind,
        expected: SpecKind,
        actual: SpecKind,
    },

    #[error("Kind already registered: {0}")]
    DuplicateKind(GroupVersionKind),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
