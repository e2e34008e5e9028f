//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure an operator-facing call can surface maps to exactly one of
/// these variants; the HTTP layer translates them 1:1 into status codes.
/// None of them are retried by the engine itself — a caller that loses an
/// optimistic race must re-fetch fresh state before resubmitting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required message or reason was blank (checked before storage).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested action is not legal from the partner's current state.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Lost the optimistic compare-and-swap race against a concurrent writer.
    #[error("concurrent modification: {0}")]
    Conflict(String),

    /// No partner exists with the requested id.
    #[error("not found")]
    NotFound,

    /// Credential missing, expired, or otherwise unusable.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Valid credential, insufficient role.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// An invalid identifier (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Storage-layer fault. Surfaced as a generic internal failure; the
    /// atomic dual write guarantees it never leaves state and history apart.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
