//! # Offers Module
//!
//! Special offer types and the discount engine.
//!
//! ## Offer Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Discount Engine                          │
//! │                                                             │
//! │  aggregate qty ──┐                                          │
//! │  unit price ─────┼──► SpecialOfferType::discount() ──► $    │
//! │  offer argument ─┘                                          │
//! │                                                             │
//! │  ThreeForTwo        floor(qty/3) × price                    │
//! │  TwoForAmount       qty×price − (bundles×arg + rest×price)  │
//! │  FiveForAmount      qty×price − (bundles×arg + rest×price)  │
//! │  TenPercentDiscount qty × price × arg / 100                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A single dispatch function per offer kind avoids a subclass per offer.
//! All arithmetic is exact decimal; bundle thresholds apply to whole-unit
//! counts and fractional remainders are always paid at full unit price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::types::Product;
use crate::validation::{validate_offer_amount, validate_percentage};

// =============================================================================
// Special Offer Type
// =============================================================================

/// The kinds of promotional rules the engine knows how to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialOfferType {
    /// Buy 3 items, pay for 2. The argument must still be positive but
    /// does not enter the math.
    ThreeForTwo,
    /// Percentage discount on the line. Argument: percentage in (0, 100).
    TenPercentDiscount,
    /// Buy 2 items for a fixed bundle price. Argument: bundle price > 0.
    TwoForAmount,
    /// Buy 5 items for a fixed bundle price. Argument: bundle price > 0.
    FiveForAmount,
}

impl SpecialOfferType {
    /// Computes the reduction for this offer kind.
    ///
    /// Returns a *positive* amount (the cart negates it before storing it on
    /// the receipt), or zero when the aggregate quantity is below the offer's
    /// bundle threshold. Percentage offers have no threshold.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use tally_core::offers::SpecialOfferType;
    ///
    /// // 7 cans at $1.00 on 3-for-2: two full bundles, one can free each
    /// let d = SpecialOfferType::ThreeForTwo.discount(dec!(7), dec!(1.00), dec!(0));
    /// assert_eq!(d, dec!(2.00));
    /// ```
    pub fn discount(&self, quantity: Decimal, unit_price: Decimal, argument: Decimal) -> Decimal {
        match self {
            SpecialOfferType::ThreeForTwo => (quantity / dec!(3)).floor() * unit_price,
            SpecialOfferType::TwoForAmount => {
                bundle_discount(quantity, unit_price, argument, dec!(2))
            }
            SpecialOfferType::FiveForAmount => {
                bundle_discount(quantity, unit_price, argument, dec!(5))
            }
            SpecialOfferType::TenPercentDiscount => {
                quantity * unit_price * argument / Decimal::ONE_HUNDRED
            }
        }
    }

    /// Human-readable rule text used as the receipt discount description.
    pub fn describe(&self, argument: Decimal) -> String {
        match self {
            SpecialOfferType::ThreeForTwo => "3 for 2".to_string(),
            SpecialOfferType::TenPercentDiscount => format!("{}% off", argument.normalize()),
            SpecialOfferType::TwoForAmount => format!("2 for {}", argument),
            SpecialOfferType::FiveForAmount => format!("5 for {}", argument),
        }
    }

    /// Whether this kind takes a percentage argument (vs a bundle price).
    #[inline]
    pub const fn is_percentage(&self) -> bool {
        matches!(self, SpecialOfferType::TenPercentDiscount)
    }
}

/// Shared math for the fixed-bundle-price offers.
///
/// Payable = full bundles at the bundle price, plus the remainder (including
/// any fractional part) at full unit price. The discount is whatever that
/// saves against undiscounted pricing; below one full bundle it is zero.
fn bundle_discount(
    quantity: Decimal,
    unit_price: Decimal,
    argument: Decimal,
    bundle_size: Decimal,
) -> Decimal {
    let bundles = (quantity / bundle_size).floor();
    if bundles.is_zero() {
        return Decimal::ZERO;
    }
    let remainder = quantity - bundles * bundle_size;
    quantity * unit_price - (bundles * argument + remainder * unit_price)
}

// =============================================================================
// Offer
// =============================================================================

/// A registered promotional rule for one product.
///
/// The argument's valid range depends on the offer kind: percentage offers
/// require `0 < argument < 100`, fixed-amount offers require `argument > 0`.
/// At most one offer is active per product; the teller's offer map replaces
/// earlier registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    offer_type: SpecialOfferType,
    product: Product,
    argument: Decimal,
}

impl Offer {
    /// Creates an offer, validating the argument for the offer kind.
    pub fn new(
        offer_type: SpecialOfferType,
        product: Product,
        argument: Decimal,
    ) -> ValidationResult<Self> {
        if offer_type.is_percentage() {
            validate_percentage(argument)?;
        } else {
            validate_offer_amount(argument)?;
        }
        Ok(Offer {
            offer_type,
            product,
            argument,
        })
    }

    #[inline]
    pub fn offer_type(&self) -> SpecialOfferType {
        self.offer_type
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn argument(&self) -> Decimal {
        self.argument
    }

    /// The reduction this offer yields for an aggregate quantity at a price.
    pub fn discount(&self, quantity: Decimal, unit_price: Decimal) -> Decimal {
        self.offer_type.discount(quantity, unit_price, self.argument)
    }

    /// Receipt description for this offer.
    pub fn describe(&self) -> String {
        self.offer_type.describe(self.argument)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductUnit;
    use rust_decimal_macros::dec;

    fn toothbrush() -> Product {
        Product::new("toothbrush", "Toothbrush", ProductUnit::Each).unwrap()
    }

    #[test]
    fn test_three_for_two_per_bundle() {
        let kind = SpecialOfferType::ThreeForTwo;
        assert_eq!(kind.discount(dec!(3), dec!(0.99), dec!(0)), dec!(0.99));
        assert_eq!(kind.discount(dec!(6), dec!(0.99), dec!(0)), dec!(1.98));
        // Partial bundle pays full price
        assert_eq!(kind.discount(dec!(5), dec!(0.99), dec!(0)), dec!(0.99));
    }

    #[test]
    fn test_three_for_two_below_threshold() {
        let kind = SpecialOfferType::ThreeForTwo;
        assert_eq!(kind.discount(dec!(1), dec!(0.99), dec!(0)), dec!(0));
        assert_eq!(kind.discount(dec!(2), dec!(0.99), dec!(0)), dec!(0));
        // Fractional quantity below a whole bundle
        assert_eq!(kind.discount(dec!(2.9), dec!(0.99), dec!(0)), dec!(0));
    }

    #[test]
    fn test_two_for_amount_reference_value() {
        // Two $1.00 items for a $1.50 bundle save exactly 0.50
        let kind = SpecialOfferType::TwoForAmount;
        assert_eq!(kind.discount(dec!(2), dec!(1.00), dec!(1.50)), dec!(0.50));
    }

    #[test]
    fn test_two_for_amount_odd_quantity() {
        // 5 at $1.00, bundles of 2 for $1.50: pay 2×1.50 + 1×1.00 = 4.00
        let kind = SpecialOfferType::TwoForAmount;
        assert_eq!(kind.discount(dec!(5), dec!(1.00), dec!(1.50)), dec!(1.00));
        assert_eq!(kind.discount(dec!(1), dec!(1.00), dec!(1.50)), dec!(0));
    }

    #[test]
    fn test_two_for_amount_fractional_remainder() {
        // 2.5 units: one bundle, 0.5 units at full price. Only the bundle saves.
        let kind = SpecialOfferType::TwoForAmount;
        assert_eq!(kind.discount(dec!(2.5), dec!(1.00), dec!(1.50)), dec!(0.50));
    }

    #[test]
    fn test_five_for_amount() {
        // 6 tubes at $1.79, 5 for $7.49: pay 7.49 + 1.79 = 9.28, save 1.46
        let kind = SpecialOfferType::FiveForAmount;
        assert_eq!(kind.discount(dec!(6), dec!(1.79), dec!(7.49)), dec!(1.46));
        assert_eq!(kind.discount(dec!(4), dec!(1.79), dec!(7.49)), dec!(0));
    }

    #[test]
    fn test_ten_percent_discount() {
        // 2 × $100 at 10% off saves $20
        let kind = SpecialOfferType::TenPercentDiscount;
        assert_eq!(kind.discount(dec!(2), dec!(100), dec!(10)), dec!(20));
        // No threshold: fractional weight quantities discount too
        assert_eq!(kind.discount(dec!(0.5), dec!(2.00), dec!(10)), dec!(0.100));
    }

    #[test]
    fn test_offer_argument_validation() {
        let p = toothbrush();
        assert!(Offer::new(SpecialOfferType::TenPercentDiscount, p.clone(), dec!(10)).is_ok());
        assert!(Offer::new(SpecialOfferType::TenPercentDiscount, p.clone(), dec!(0)).is_err());
        assert!(Offer::new(SpecialOfferType::TenPercentDiscount, p.clone(), dec!(100)).is_err());
        assert!(Offer::new(SpecialOfferType::TwoForAmount, p.clone(), dec!(1.50)).is_ok());
        assert!(Offer::new(SpecialOfferType::TwoForAmount, p.clone(), dec!(-1)).is_err());
        assert!(Offer::new(SpecialOfferType::FiveForAmount, p, dec!(0)).is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(SpecialOfferType::ThreeForTwo.describe(dec!(0)), "3 for 2");
        assert_eq!(
            SpecialOfferType::TenPercentDiscount.describe(dec!(10)),
            "10% off"
        );
        assert_eq!(
            SpecialOfferType::TwoForAmount.describe(dec!(1.50)),
            "2 for 1.50"
        );
        assert_eq!(
            SpecialOfferType::FiveForAmount.describe(dec!(7.49)),
            "5 for 7.49"
        );
    }
}
