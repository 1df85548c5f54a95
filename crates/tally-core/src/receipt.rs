//! # Receipt Module
//!
//! The itemized result of one checkout.
//!
//! ## Lifecycle
//! A receipt is created empty by the teller, populated once (line items
//! first, then discounts), and read-only afterwards for totaling and
//! printing. Each checkout owns its own receipt; nothing is shared.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Discount, Product};

// =============================================================================
// Receipt Item
// =============================================================================

/// One priced line on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    product: Product,
    quantity: Decimal,
    price: Decimal,
    total_price: Decimal,
}

impl ReceiptItem {
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Unit price at checkout time.
    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Line total before discounts (`quantity × price`).
    #[inline]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// An itemized receipt: ordered line items plus ordered discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    discounts: Vec<Discount>,
    created_at: DateTime<Utc>,
}

impl Receipt {
    /// Creates an empty receipt stamped with the current time.
    pub fn new() -> Self {
        Receipt {
            items: Vec::new(),
            discounts: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a priced line item.
    pub fn add_product(
        &mut self,
        product: Product,
        quantity: Decimal,
        price: Decimal,
        total_price: Decimal,
    ) {
        self.items.push(ReceiptItem {
            product,
            quantity,
            price,
            total_price,
        });
    }

    /// Appends a discount. The discount's amount is negative by construction.
    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    /// The grand total: line totals plus (negative) discount amounts,
    /// clamped at zero.
    ///
    /// ## Why Clamp?
    /// A misconfigured offer can mathematically exceed the subtotal. The
    /// register must never display a negative amount due, so the clamp is a
    /// deliberate floor, not error suppression.
    pub fn total_price(&self) -> Decimal {
        let items: Decimal = self.items.iter().map(ReceiptItem::total_price).sum();
        let discounts: Decimal = self.discounts.iter().map(Discount::amount).sum();
        (items + discounts).max(Decimal::ZERO)
    }

    /// Line items in checkout order.
    #[inline]
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Discounts in the order they were applied.
    #[inline]
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// When this receipt was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Receipt::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
