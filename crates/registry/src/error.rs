use thiserror::Error;

use crate::ConsultationId;

/// Errors reported by registry operations.
///
/// A failed operation never mutates the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No record with the given id is stored.
    #[error("Consultation schedule not found: {0}")]
    NotFound(ConsultationId),

    /// A record with the given id is already stored.
    #[error("Consultation schedule with ID {0} already exists")]
    Conflict(ConsultationId),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
