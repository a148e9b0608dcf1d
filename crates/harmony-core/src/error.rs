//! # Error Types
//!
//! Domain-specific error types for harmony-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  harmony-core errors (this file)                                    │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  harmony-store errors (separate crate)                              │
//! │  ├── DbError          - Snapshot storage failures                   │
//! │  └── StoreError       - What store consumers see                    │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → consumer          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, statuses)
//! 3. Errors are enum variants, never String
//!
//! Lookup misses (updating a booking or provider that does not exist) are
//! NOT errors anywhere in this codebase: the store treats them as tolerant
//! no-ops.

use thiserror::Error;

use crate::types::BookingStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout requires a session user.
    ///
    /// ## When This Occurs
    /// - Checkout attempted before simulated sign-in
    /// - The routing collaborator should have redirected to the sign-in view
    #[error("A signed-in user is required")]
    SignInRequired,

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A booking status change that the status machine forbids.
    ///
    /// Only returned by the validating status operation; the permissive one
    /// applies any status without consulting the machine.
    #[error("Booking cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input does not meet requirements and are
/// surfaced BEFORE any mutation happens; store state is unchanged.
#[derive(Debug, Error)]
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

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidStatusTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Pending,
        };
        assert_eq!(err.to_string(), "Booking cannot move from Completed to Pending");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "date".to_string(),
        };
        assert_eq!(err.to_string(), "date is required");

        let err = ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        };
        assert_eq!(err.to_string(), "rating must be between 0 and 5");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "time".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
