//! # Validation Module
//!
//! Input validation utilities for Tally.
//!
//! ## Validation Strategy
//! Every value object validates its inputs at construction time through the
//! functions in this module. Nothing downstream (cart, teller, printer) has
//! to re-check: if you hold a `Product` or an `Offer`, it is valid.
//!
//! ## Usage
//! ```rust
//! use rust_decimal_macros::dec;
//! use tally_core::validation::{validate_product_id, validate_quantity};
//!
//! validate_product_id("toothbrush").unwrap();
//! validate_quantity(dec!(2.5)).unwrap();
//! ```

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }
    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product name".to_string(),
        });
    }
    Ok(())
}

/// Validates a discount description.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "discount description".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be strictly positive
/// - Fractional values are legal for every unit; weight-based products
///   (kilo, gram) rely on this
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::validation::validate_quantity;
///
/// assert!(validate_quantity(dec!(0.327)).is_ok());
/// assert!(validate_quantity(dec!(0)).is_err());
/// assert!(validate_quantity(dec!(-1)).is_err());
/// ```
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be strictly positive; there are no free items in the catalog
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a percentage offer argument.
///
/// ## Rules
/// - Must be strictly between 0 and 100
pub fn validate_percentage(percentage: Decimal) -> ValidationResult<()> {
    if percentage <= Decimal::ZERO || percentage >= Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

/// Validates a fixed-amount offer argument (bundle price).
pub fn validate_offer_amount(amount: Decimal) -> ValidationResult<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "offer amount".to_string(),
        });
    }
    Ok(())
}

/// Validates a stored discount amount.
///
/// ## Rules
/// - Must be strictly negative: discounts are stored as reductions
pub fn validate_discount_amount(amount: Decimal) -> ValidationResult<()> {
    if amount >= Decimal::ZERO {
        return Err(ValidationError::MustBeNegative {
            field: "discount amount".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
