//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{DateWindowError, EntityId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Celebrity not found: {0}")]
    CelebrityNotFound(EntityId),

    #[error("Alias not found: {0}")]
    AliasNotFound(EntityId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidDateRange(#[from] DateWindowError),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CelebrityNotFound(_) => "UNKNOWN_CELEBRITY",
            Self::AliasNotFound(_) => "UNKNOWN_ALIAS",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDateRange(_) => "INVALID_DATE_RANGE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CelebrityNotFound(_) | Self::AliasNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidDateRange(_))
    }
}
