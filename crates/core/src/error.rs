//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic failures on input data live here (malformed filter
/// values, records breaking an invariant). Network and transport failures
/// belong to the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed price bucket).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A record could not be formatted for display.
    #[error("formatting failed: {0}")]
    Formatting(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn formatting(msg: impl Into<String>) -> Self {
        Self::Formatting(msg.into())
    }

    /// True for failures raised while producing display text.
    pub fn is_formatting(&self) -> bool {
        matches!(self, Self::Formatting(_))
    }
}
