//! # Error Types
//!
//! Domain-specific error types for mjg-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, stage, field)
//! 3. Errors are enum variants, never bare strings
//! 4. Each variant maps cleanly onto a user-facing message

use crate::checkout::CheckoutStage;
use crate::types::Category;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations in the catalog or the booking
/// flow. The application layer translates them into HTTP responses.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The selected item is sold out and cannot be booked.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Customer details were submitted for the wrong product category.
    #[error("Details for {submitted:?} orders do not match a {expected:?} booking")]
    CategoryMismatch {
        expected: Category,
        submitted: Category,
    },

    /// The flow is not at the stage the requested transition starts from.
    #[error("Cannot {operation} while checkout is at the {stage:?} stage")]
    StageMismatch {
        operation: &'static str,
        stage: CheckoutStage,
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
/// These occur when user input does not meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
