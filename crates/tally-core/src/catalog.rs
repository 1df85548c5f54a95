//! # Catalog Module
//!
//! Product-to-price mapping the teller and cart read during checkout.
//!
//! The catalog is a collaborator, not ambient state: the teller borrows it
//! and the cart receives it as an argument when offers are applied. Nothing
//! mutates a catalog during checkout.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{CheckoutError, CheckoutResult};
use crate::types::Product;
use crate::validation::validate_price;

// =============================================================================
// Catalog Trait
// =============================================================================

/// A source of unit prices.
///
/// ## Missing-Product Policy
/// `unit_price` returns `CheckoutError::PriceNotFound` for unknown products
/// rather than a zero-price sentinel. A silent zero would mask catalog
/// misconfiguration as free merchandise; an explicit error aborts the
/// checkout where the bug is visible.
pub trait Catalog {
    /// Registers a product at a unit price. Fails when `price <= 0`.
    fn add_product(&mut self, product: Product, price: Decimal) -> CheckoutResult<()>;

    /// Looks up the unit price for a product.
    fn unit_price(&self, product: &Product) -> CheckoutResult<Decimal>;
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// A `HashMap`-backed catalog.
///
/// ## Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use tally_core::catalog::{Catalog, MemoryCatalog};
/// use tally_core::types::{Product, ProductUnit};
///
/// let apples = Product::new("apples", "Apples", ProductUnit::Kilo).unwrap();
/// let mut catalog = MemoryCatalog::new();
/// catalog.add_product(apples.clone(), dec!(1.99)).unwrap();
/// assert_eq!(catalog.unit_price(&apples).unwrap(), dec!(1.99));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    prices: HashMap<Product, Decimal>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products registered.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Catalog for MemoryCatalog {
    fn add_product(&mut self, product: Product, price: Decimal) -> CheckoutResult<()> {
        validate_price(price)?;
        self.prices.insert(product, price);
        Ok(())
    }

    fn unit_price(&self, product: &Product) -> CheckoutResult<Decimal> {
        self.prices
            .get(product)
            .copied()
            .ok_or_else(|| CheckoutError::PriceNotFound {
                product_id: product.id().to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
