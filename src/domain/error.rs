//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the dependency model itself.
/// These are independent of how the model was discovered.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("cyclic dependency detected at entity: {entity}")]
    CycleDetected { entity: String },

    #[error("internal tree operation failed: {0}")]
    InternalError(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
