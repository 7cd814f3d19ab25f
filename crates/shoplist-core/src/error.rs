//! # Error Types
//!
//! Domain-specific error types for shoplist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoplist-core errors (this file)                                      │
//! │  └── ValidationError  - Input rejected before any statement runs       │
//! │                                                                         │
//! │  shoplist-db errors (separate crate)                                   │
//! │  └── DbError          - Driver failures, plus Validation(..)           │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → caller                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] and by `Price` parsing. The repository runs
/// these checks before issuing a statement, so a rejected input never reaches
/// the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price with three decimal places).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// An update was requested with no fields to change.
    #[error("update must change at least one field")]
    EmptyPatch,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
