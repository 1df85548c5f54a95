//! # Domain Types
//!
//! Immutable value objects used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Value Objects                          │
//! │                                                             │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐   │
//! │  │   Product    │  │ ProductQuantity  │  │   Discount   │   │
//! │  │ ──────────── │  │ ──────────────── │  │ ──────────── │   │
//! │  │ id           │  │ product          │  │ product      │   │
//! │  │ name         │  │ quantity > 0     │  │ description  │   │
//! │  │ unit         │  └──────────────────┘  │ amount < 0   │   │
//! │  └──────────────┘                        └──────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here is constructed through a validating `new` and is immutable
//! afterwards. Equality is by value; `Product` additionally hashes by value
//! so it can key catalog and offer maps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validation::{
    validate_description, validate_discount_amount, validate_product_id, validate_product_name,
    validate_quantity,
};

// =============================================================================
// Product Unit
// =============================================================================

/// The unit of measure a product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Sold individually (cans, toothbrushes).
    Each,
    /// Sold by the kilogram.
    Kilo,
    /// Sold by the gram.
    Gram,
    /// Sold by the liter.
    Liter,
}

impl ProductUnit {
    /// Whether the unit is weight-based (kilo or gram).
    ///
    /// Weight-based products are naturally sold in fractional quantities;
    /// `Each` is conceptually integral, but the model permits decimals for
    /// uniformity.
    #[inline]
    pub const fn is_weight_based(&self) -> bool {
        matches!(self, ProductUnit::Kilo | ProductUnit::Gram)
    }

    /// Decimal places used when a quantity of this unit is displayed.
    ///
    /// Receipts show `2` for two cans but `1.274` for a bag of apples.
    #[inline]
    pub const fn quantity_decimals(&self) -> u32 {
        match self {
            ProductUnit::Each => 0,
            _ => 3,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// ## Identity
/// Equality and hashing cover all three fields (id, name, unit). Two
/// products with the same id but different names are distinct values and
/// will not collide in the catalog or offer maps.
///
/// ## Example
/// ```rust
/// use tally_core::types::{Product, ProductUnit};
///
/// let apples = Product::new("apples", "Apples", ProductUnit::Kilo).unwrap();
/// assert_eq!(apples.name(), "Apples");
/// assert!(apples.unit().is_weight_based());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    unit: ProductUnit,
}

impl Product {
    /// Creates a product, validating that id and name are non-empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: ProductUnit,
    ) -> ValidationResult<Self> {
        let id = id.into();
        let name = name.into();
        validate_product_id(&id)?;
        validate_product_name(&name)?;
        Ok(Product { id, name, unit })
    }

    /// The product identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name shown on receipts.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit of measure.
    #[inline]
    pub fn unit(&self) -> ProductUnit {
        self.unit
    }
}

// =============================================================================
// Product Quantity
// =============================================================================

/// A quantified product: one cart line as entered at the register.
///
/// Invariant: `quantity > 0`, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    product: Product,
    quantity: Decimal,
}

impl ProductQuantity {
    /// Creates a product/quantity pair, rejecting non-positive quantities.
    pub fn new(product: Product, quantity: Decimal) -> ValidationResult<Self> {
        validate_quantity(quantity)?;
        Ok(ProductQuantity { product, quantity })
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A discount applied to a receipt.
///
/// ## Sign Convention
/// The amount is stored *negative*: a discount is a reduction, and the
/// receipt total is a plain sum of line totals and discount amounts. The
/// offer engine computes a positive reduction and the cart negates it
/// before constructing the `Discount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    product: Product,
    description: String,
    amount: Decimal,
}

impl Discount {
    /// Creates a discount, rejecting empty descriptions and amounts >= 0.
    pub fn new(
        product: Product,
        description: impl Into<String>,
        amount: Decimal,
    ) -> ValidationResult<Self> {
        let description = description.into();
        validate_description(&description)?;
        validate_discount_amount(amount)?;
        Ok(Discount {
            product,
            description,
            amount,
        })
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Human-readable rule description, e.g. `"3 for 2"`.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The (negative) reduction applied to the receipt total.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
