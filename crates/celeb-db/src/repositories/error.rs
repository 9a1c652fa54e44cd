//! Error handling utilities for repositories

use celeb_core::error::DomainError;
use celeb_core::value_objects::EntityId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign-key violation to a domain error, anything else to
/// `DatabaseError`
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    map_db_error(e)
}

/// Create a "celebrity not found" error
pub fn celebrity_not_found(id: EntityId) -> DomainError {
    DomainError::CelebrityNotFound(id)
}
