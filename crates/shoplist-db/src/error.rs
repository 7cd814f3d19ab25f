//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (shoplist-core) ──┐  rejected before any statement    │
//! │                                     │                                   │
//! │  SQLite Error (sqlx::Error) ────────┤                                   │
//! │                                     ▼                                   │
//! │  DbError (this module) ← categorizes, keeps the driver error as source │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (binaries report it through anyhow)                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here retries or recovers; a failed statement surfaces once.

use shoplist_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique constraint violation.
    #[error("Duplicate value for {field}")]
    UniqueViolation { field: String },

    /// Any other constraint failure (NOT NULL, CHECK, foreign key).
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Malformed `DATABASE_URL`
    /// - Database file can't be created or opened
    /// - Pool was closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Applying the embedded schema failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Statement failed in the driver. The sqlx error is kept unchanged.
    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Input rejected before reaching the database.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// Database "UNIQUE constraint failed: t.c"  → DbError::UniqueViolation
/// Database "... constraint failed ..."      → DbError::ConstraintViolation
/// sqlx::Error::PoolTimedOut                  → DbError::PoolExhausted
/// sqlx::Error::PoolClosed                    → DbError::ConnectionFailed
/// Other                                      → DbError::Query (unchanged)
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let msg = db_err.message();

            // SQLite reports constraint failures as
            // "<KIND> constraint failed: <table>.<column>"
            if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                return DbError::UniqueViolation {
                    field: field.to_string(),
                };
            }
            if msg.contains("constraint failed") {
                return DbError::ConstraintViolation {
                    message: msg.to_string(),
                };
            }
        }

        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            other => DbError::Query(other),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
