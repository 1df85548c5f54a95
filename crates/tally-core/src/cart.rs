//! # Shopping Cart Module
//!
//! Accumulates product quantities and applies registered offers at checkout.
//!
//! ## Two Views of the Same Cart
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  add_item_quantity(apples, 1.0)                             │
//! │  add_item_quantity(soda,   2)                               │
//! │  add_item_quantity(apples, 0.5)                             │
//! │                                                             │
//! │  items (per add call)        aggregate (per product)        │
//! │  ──────────────────────      ─────────────────────────      │
//! │  apples 1.0                  apples 1.5                     │
//! │  soda   2                    soda   2                       │
//! │  apples 0.5                                                 │
//! │                                                             │
//! │  Receipt lines come from `items`; offer math always uses    │
//! │  the aggregate, never the individual add calls.             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CheckoutResult, ValidationResult};
use crate::offers::Offer;
use crate::receipt::Receipt;
use crate::types::{Discount, Product, ProductQuantity};

// =============================================================================
// Shopping Cart
// =============================================================================

/// A shopping cart: ordered add-call records plus per-product aggregates.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<ProductQuantity>,
    quantities: HashMap<Product, Decimal>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single unit of the given product.
    pub fn add_item(&mut self, product: Product) -> ValidationResult<()> {
        self.add_item_quantity(product, Decimal::ONE)
    }

    /// Adds a quantity of the given product.
    ///
    /// Fails when `quantity <= 0`. Each call appends its own line record;
    /// the aggregate quantity for the product accumulates across calls.
    pub fn add_item_quantity(&mut self, product: Product, quantity: Decimal) -> ValidationResult<()> {
        let line = ProductQuantity::new(product.clone(), quantity)?;
        self.items.push(line);
        *self.quantities.entry(product).or_insert(Decimal::ZERO) += quantity;
        Ok(())
    }

    /// Line records in the order they were added.
    #[inline]
    pub fn items(&self) -> &[ProductQuantity] {
        &self.items
    }

    /// Aggregate quantity per product.
    #[inline]
    pub fn product_quantities(&self) -> &HashMap<Product, Decimal> {
        &self.quantities
    }

    /// Applies registered offers against catalog prices, appending any
    /// resulting discounts to the receipt.
    ///
    /// Products are visited in first-add order so discount lines are
    /// deterministic. A discount is recorded only when the computed
    /// reduction is strictly positive; below-threshold quantities and
    /// zero-valued percentage discounts leave no trace on the receipt.
    pub fn handle_offers<C: Catalog>(
        &self,
        receipt: &mut Receipt,
        offers: &HashMap<Product, Offer>,
        catalog: &C,
    ) -> CheckoutResult<()> {
        let mut seen = HashSet::new();
        for line in &self.items {
            let product = line.product();
            if !seen.insert(product) {
                continue;
            }
            let Some(offer) = offers.get(product) else {
                continue;
            };
            let quantity = self.quantities[product];
            let unit_price = catalog.unit_price(product)?;
            let amount = offer.discount(quantity, unit_price);
            if amount > Decimal::ZERO {
                debug!(
                    product = product.id(),
                    %quantity,
                    %amount,
                    description = %offer.describe(),
                    "offer applied"
                );
                receipt.add_discount(Discount::new(product.clone(), offer.describe(), -amount)?);
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
