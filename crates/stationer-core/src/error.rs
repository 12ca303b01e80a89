//! # Error Types
//!
//! Domain-specific error types for stationer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stationer-core errors (this file)                                      │
//! │  ├── CoreError        - Domain conditions reported to the driver        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  stationer-cli                                                          │
//! │  └── ConfigError      - Bad environment configuration                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed by the menu loop           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. A lookup miss is not an error at all: the
//! inventory answers with `Option::None`.

use thiserror::Error;

use crate::role::Role;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this code is in the inventory.
    ///
    /// Raised only by operations that need a product to continue (adding to
    /// the cart). Plain lookups return `None` instead.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout or cart display was asked for with no lines in the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Pay (Yape)
    ///      │
    ///      ▼
    /// cart.is_empty()? ── yes ──► EmptyCart, gateway never called
    /// ```
    #[error("Cart is empty. Add products before continuing")]
    EmptyCart,

    /// The selected role may not run this action.
    #[error("{role} cannot {action}")]
    NotPermitted { role: Role, action: &'static str },

    /// A menu choice that maps to nothing.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used by the driver before values reach the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a quantity that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound("X9".to_string()).to_string(),
            "Product not found: X9"
        );
        assert_eq!(
            CoreError::NotPermitted {
                role: Role::Supplier,
                action: "add products to the cart",
            }
            .to_string(),
            "Supplier cannot add products to the cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
