//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Error Types                            │
//! │                                                             │
//! │  ├── CheckoutError    - Checkout-time failures              │
//! │  └── ValidationError  - Input validation failures           │
//! │                                                             │
//! │  Flow: ValidationError → CheckoutError → Caller             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String
//! 4. Validation errors are raised at construction time - fail fast,
//!    no partially-built value objects

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout-time errors.
///
/// These abort the entire checkout: a receipt is either complete or not
/// returned at all. They are programming/configuration errors, never
/// transient faults, so there is no retry path.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The catalog has no price for a product in the cart.
    ///
    /// ## When This Occurs
    /// - A product was added to the cart but never to the catalog
    /// - Catalog and cart were built against different product values
    ///
    /// Returning an error here (instead of a zero-price sentinel) keeps a
    /// misconfigured catalog from silently producing free line items.
    #[error("No price in catalog for product: {product_id}")]
    PriceNotFound { product_id: String },

    /// A catalog returned a non-positive price for a cart line.
    ///
    /// The in-memory catalog rejects these at `add_product` time, but the
    /// `Catalog` trait is open, so the teller re-checks at checkout.
    #[error("Invalid price {price} for product: {product_id}")]
    InvalidPrice { product_id: String, price: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously when a value object is constructed with invalid
/// inputs. Used for early validation before any pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be strictly negative (discount amounts are reductions).
    #[error("{field} must be negative")]
    MustBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max} (exclusive)")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
