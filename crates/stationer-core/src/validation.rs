//! # Validation Module
//!
//! Input validation used by the driver before values reach the core.
//!
//! The cart itself trusts its caller: `Cart::add_item` never checks the
//! quantity. These functions are the layer in front of it.
//!
//! ## Usage
//! ```rust
//! use stationer_core::validation::parse_quantity;
//!
//! assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
//! assert!(parse_quantity("0").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## User Workflow
/// ```text
/// Menu: Add product to cart
///       │
///       ▼
/// "Quantity: " 5
///       │
///       ▼
/// validate_quantity(5) ← THIS FUNCTION
///       │
///       ├── qty <= 0?   → "quantity must be positive"
///       └── OK → Cart::add_item
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Parses and validates a quantity typed by the user.
///
/// The text must fit a 32-bit integer, which keeps line amounts far from
/// `i64` overflow.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let qty: i32 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    let qty = i64::from(qty);
    validate_quantity(qty)?;
    Ok(qty)
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
