//! Domain error taxonomy

use thiserror::Error;

/// Errors surfaced by handlers and the synchronizer.
///
/// Every failed operation ends in exactly one of these variants; partial
/// success (local committed, remote failed) is never observable.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    /// The billing provider declined the operation for business reasons.
    /// Local state has been rolled back.
    #[error("Billing provider rejected the operation: {0}")]
    RemoteRejected(String),

    /// Network/timeout talking to the billing provider. Local state has
    /// been rolled back; the caller may retry.
    #[error("Billing provider unreachable: {0}")]
    RemoteUnreachable(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether the operation may succeed if the caller retries it.
    /// The synchronizer itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::RemoteUnreachable(_) | DomainError::Persistence(_)
        )
    }
}

impl From<crate::domain::ports::GatewayError> for DomainError {
    fn from(e: crate::domain::ports::GatewayError) -> Self {
        match e {
            crate::domain::ports::GatewayError::Rejected(reason) => Self::RemoteRejected(reason),
            crate::domain::ports::GatewayError::Unreachable(reason) => {
                Self::RemoteUnreachable(reason)
            }
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Map a SeaORM error into the domain taxonomy.
pub fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Persistence(e.to_string())
}
