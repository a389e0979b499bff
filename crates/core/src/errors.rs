//! Core error types for the ROI calculator.
//!
//! This module defines storage- and transport-agnostic error types. Errors from
//! SQLite, HTTP clients and the like are converted into these types by the crates
//! that own those dependencies.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ROI calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Mail delivery failed: {0}")]
    Mail(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// All details are kept as `String` so that the storage layer can convert
/// Diesel / r2d2 errors into this shape without leaking those types.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// The single-writer actor is no longer running.
    #[error("Database writer unavailable: {0}")]
    WriterUnavailable(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{0}' must be a finite, non-negative number")]
    Negative(String),

    #[error("Field '{field}' must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl ValidationError {
    /// Creates an OutOfRange error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::out_of_range("people_involved", 0.0, 100.0);
        assert_eq!(
            err.to_string(),
            "Field 'people_involved' must be between 0 and 100"
        );

        let err: Error = ValidationError::MissingField("company".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'company' is missing"
        );

        let err: Error = DatabaseError::NotFound("abc".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Database operation failed: Record not found: abc"
        );
    }
}
