//! # Teller Module
//!
//! Orchestrates a checkout: prices every cart line from the catalog, then
//! lets the cart apply registered offers, producing a completed receipt.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  checks_out_articles_from(cart)                             │
//! │                                                             │
//! │  for each cart line (insertion order):                      │
//! │      price   ◄── catalog.unit_price(product)   (error ⇒ ✗)  │
//! │      receipt ◄── line item (qty × price)                    │
//! │                                                             │
//! │  cart.handle_offers(receipt, offers, catalog)               │
//! │                                                             │
//! │  ⇒ Receipt (or the whole checkout fails, no partial result) │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::cart::ShoppingCart;
use crate::catalog::Catalog;
use crate::error::{CheckoutError, CheckoutResult, ValidationResult};
use crate::offers::{Offer, SpecialOfferType};
use crate::receipt::Receipt;
use crate::types::{Product, ProductQuantity};

// =============================================================================
// Teller
// =============================================================================

/// The checkout orchestrator.
///
/// Borrows the catalog read-only for its lifetime; offer registration is the
/// only mutable state and is not designed for concurrent mutation.
pub struct Teller<'a, C: Catalog> {
    catalog: &'a C,
    offers: HashMap<Product, Offer>,
}

impl<'a, C: Catalog> Teller<'a, C> {
    /// Creates a teller over a catalog with no offers registered.
    pub fn new(catalog: &'a C) -> Self {
        Teller {
            catalog,
            offers: HashMap::new(),
        }
    }

    /// Registers a special offer for a product.
    ///
    /// At most one offer is active per product: registering again replaces
    /// the earlier offer. Fails when the argument is out of range for the
    /// offer kind.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: Decimal,
    ) -> ValidationResult<()> {
        let offer = Offer::new(offer_type, product.clone(), argument)?;
        debug!(product = product.id(), ?offer_type, %argument, "offer registered");
        self.offers.insert(product, offer);
        Ok(())
    }

    /// Currently registered offers, keyed by product.
    #[inline]
    pub fn offers(&self) -> &HashMap<Product, Offer> {
        &self.offers
    }

    /// Checks out a cart, producing an itemized receipt.
    ///
    /// Prices each cart line in insertion order, then applies offers once
    /// against the aggregate quantities. Any missing or non-positive price
    /// aborts the entire checkout; no partial receipt is returned.
    pub fn checks_out_articles_from(&self, cart: &ShoppingCart) -> CheckoutResult<Receipt> {
        let mut receipt = Receipt::new();

        for line in cart.items() {
            self.price_line(&mut receipt, line)?;
        }

        cart.handle_offers(&mut receipt, &self.offers, self.catalog)?;

        info!(
            items = receipt.items().len(),
            discounts = receipt.discounts().len(),
            total = %receipt.total_price(),
            "checkout complete"
        );
        Ok(receipt)
    }

    fn price_line(&self, receipt: &mut Receipt, line: &ProductQuantity) -> CheckoutResult<()> {
        let product = line.product();
        let quantity = line.quantity();
        let unit_price = self.catalog.unit_price(product)?;

        // The trait is open; a third-party catalog could hand back junk.
        if unit_price <= Decimal::ZERO {
            return Err(CheckoutError::InvalidPrice {
                product_id: product.id().to_string(),
                price: unit_price.to_string(),
            });
        }

        let total_price = quantity * unit_price;
        receipt.add_product(product.clone(), quantity, unit_price, total_price);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::types::ProductUnit;
    use rust_decimal_macros::dec;

    fn toothbrush() -> Product {
        Product::new("toothbrush", "Toothbrush", ProductUnit::Each).unwrap()
    }

    fn apples() -> Product {
        Product::new("apples", "Apples", ProductUnit::Kilo).unwrap()
    }

    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.add_product(toothbrush(), dec!(0.99)).unwrap();
        catalog.add_product(apples(), dec!(1.99)).unwrap();
        catalog
    }

    #[test]
    fn test_empty_cart_checkout() {
        let catalog = catalog();
        let teller = Teller::new(&catalog);
        let receipt = teller.checks_out_articles_from(&ShoppingCart::new()).unwrap();
        assert!(receipt.items().is_empty());
        assert!(receipt.discounts().is_empty());
        assert_eq!(receipt.total_price(), dec!(0));
    }

    #[test]
    fn test_lines_priced_from_catalog() {
        let catalog = catalog();
        let teller = Teller::new(&catalog);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(apples(), dec!(2.5)).unwrap();

        let receipt = teller.checks_out_articles_from(&cart).unwrap();
        assert_eq!(receipt.items().len(), 1);
        assert_eq!(receipt.items()[0].price(), dec!(1.99));
        assert_eq!(receipt.items()[0].total_price(), dec!(4.975));
        assert_eq!(receipt.total_price(), dec!(4.975));
    }

    #[test]
    fn test_three_for_two_end_to_end() {
        // 3 units of a $1.00 product on 3-for-2: total $2.00, one -$1.00 discount
        let soap = Product::new("soap", "Soap", ProductUnit::Each).unwrap();
        let mut catalog = MemoryCatalog::new();
        catalog.add_product(soap.clone(), dec!(1.00)).unwrap();

        let mut teller = Teller::new(&catalog);
        teller
            .add_special_offer(SpecialOfferType::ThreeForTwo, soap.clone(), dec!(10))
            .unwrap();

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(soap, dec!(3)).unwrap();

        let receipt = teller.checks_out_articles_from(&cart).unwrap();
        assert_eq!(receipt.discounts().len(), 1);
        assert_eq!(receipt.discounts()[0].amount(), dec!(-1.00));
        assert_eq!(receipt.total_price(), dec!(2.00));
    }

    #[test]
    fn test_ten_percent_end_to_end() {
        let catalog = catalog();
        let mut teller = Teller::new(&catalog);
        teller
            .add_special_offer(SpecialOfferType::TenPercentDiscount, apples(), dec!(20))
            .unwrap();

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(apples(), dec!(2)).unwrap();

        // 2 kg × $1.99 = $3.98, minus 20% = $3.184
        let receipt = teller.checks_out_articles_from(&cart).unwrap();
        assert_eq!(receipt.discounts()[0].amount(), dec!(-0.796));
        assert_eq!(receipt.total_price(), dec!(3.184));
    }

    #[test]
    fn test_offer_registration_replaces_earlier() {
        let catalog = catalog();
        let mut teller = Teller::new(&catalog);
        teller
            .add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush(), dec!(10))
            .unwrap();
        teller
            .add_special_offer(SpecialOfferType::TenPercentDiscount, toothbrush(), dec!(10))
            .unwrap();

        assert_eq!(teller.offers().len(), 1);
        assert_eq!(
            teller.offers()[&toothbrush()].offer_type(),
            SpecialOfferType::TenPercentDiscount
        );

        // 3 toothbrushes now get 10% off, not 3-for-2
        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(toothbrush(), dec!(3)).unwrap();
        let receipt = teller.checks_out_articles_from(&cart).unwrap();
        assert_eq!(receipt.discounts()[0].description(), "10% off");
        assert_eq!(receipt.discounts()[0].amount(), dec!(-0.297));
    }

    #[test]
    fn test_missing_price_aborts_checkout() {
        let catalog = MemoryCatalog::new();
        let teller = Teller::new(&catalog);

        let mut cart = ShoppingCart::new();
        cart.add_item(toothbrush()).unwrap();

        let err = teller.checks_out_articles_from(&cart).unwrap_err();
        assert!(matches!(err, CheckoutError::PriceNotFound { .. }));
    }

    #[test]
    fn test_invalid_offer_argument_rejected() {
        let catalog = catalog();
        let mut teller = Teller::new(&catalog);
        assert!(teller
            .add_special_offer(SpecialOfferType::TenPercentDiscount, apples(), dec!(120))
            .is_err());
        assert!(teller.offers().is_empty());
    }
}
