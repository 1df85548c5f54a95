//! # Receipt Printer Module
//!
//! Renders a receipt as an aligned text block.
//!
//! ## Layout
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Toothbrush                        $0.99│
//! │ Apples                            $4.98│
//! │   $1.99 * 2.500                        │
//! │ 3 for 2 (Toothbrush)             $-0.99│
//! │ Total:                            $4.98│
//! └────────────────────────────────────────┘
//! ```
//!
//! Names are left-aligned, formatted prices right-aligned within a fixed
//! column width (default 40). Monetary values are rounded half-up to two
//! decimals *here and only here*; everything upstream stays exact.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::receipt::{Receipt, ReceiptItem};
use crate::types::{Discount, ProductUnit};

/// Default receipt width in characters.
pub const DEFAULT_COLUMNS: usize = 40;

// =============================================================================
// Receipt Printer
// =============================================================================

/// Formats receipts into fixed-width text.
#[derive(Debug, Clone)]
pub struct ReceiptPrinter {
    columns: usize,
}

impl ReceiptPrinter {
    /// Creates a printer with the default 40-character width.
    pub fn new() -> Self {
        Self::with_columns(DEFAULT_COLUMNS)
    }

    /// Creates a printer with a custom width.
    pub fn with_columns(columns: usize) -> Self {
        ReceiptPrinter { columns }
    }

    /// Renders the receipt: items, then discounts, then the total line.
    pub fn print_receipt(&self, receipt: &Receipt) -> String {
        let mut out = String::new();
        for item in receipt.items() {
            out.push_str(&self.format_item(item));
        }
        for discount in receipt.discounts() {
            out.push_str(&self.format_discount(discount));
        }
        out.push_str(&self.format_line("Total:", &format_price(receipt.total_price())));
        out
    }

    fn format_item(&self, item: &ReceiptItem) -> String {
        let mut line = self.format_line(item.product().name(), &format_price(item.total_price()));
        if item.quantity() != Decimal::ONE {
            line.push_str(&format!(
                "  {} * {}\n",
                format_price(item.price()),
                format_quantity(item.quantity(), item.product().unit())
            ));
        }
        line
    }

    fn format_discount(&self, discount: &Discount) -> String {
        let name = format!("{} ({})", discount.description(), discount.product().name());
        self.format_line(&name, &format_price(discount.amount()))
    }

    /// One receipt line: `name` left-aligned, `price` flush right.
    fn format_line(&self, name: &str, price: &str) -> String {
        let width = self.columns.saturating_sub(price.len());
        format!("{name:<width$}{price}\n")
    }
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        ReceiptPrinter::new()
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// `$X.XX`, rounded half-up to two decimals at the display boundary.
fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Quantity with 0 decimals for `Each`, 3 decimals for measured units.
fn format_quantity(quantity: Decimal, unit: ProductUnit) -> String {
    let decimals = unit.quantity_decimals();
    let rounded =
        quantity.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = decimals as usize)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use rust_decimal_macros::dec;

    fn toothbrush() -> Product {
        Product::new("toothbrush", "Toothbrush", ProductUnit::Each).unwrap()
    }

    fn apples() -> Product {
        Product::new("apples", "Apples", ProductUnit::Kilo).unwrap()
    }

    #[test]
    fn test_format_price_half_up() {
        assert_eq!(format_price(dec!(1)), "$1.00");
        assert_eq!(format_price(dec!(4.975)), "$4.98");
        assert_eq!(format_price(dec!(0.994)), "$0.99");
        assert_eq!(format_price(dec!(-0.99)), "$-0.99");
    }

    #[test]
    fn test_format_quantity_per_unit() {
        assert_eq!(format_quantity(dec!(2), ProductUnit::Each), "2");
        assert_eq!(format_quantity(dec!(2.5), ProductUnit::Kilo), "2.500");
        assert_eq!(format_quantity(dec!(0.75), ProductUnit::Liter), "0.750");
    }

    #[test]
    fn test_single_item_line() {
        let mut receipt = Receipt::new();
        receipt.add_product(toothbrush(), dec!(1), dec!(0.99), dec!(0.99));

        let text = ReceiptPrinter::new().print_receipt(&receipt);
        let expected = format!(
            "Toothbrush{pad}$0.99\nTotal:{pad2}$0.99\n",
            pad = " ".repeat(25),
            pad2 = " ".repeat(29),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_quantity_line_for_non_unit_quantity() {
        let mut receipt = Receipt::new();
        receipt.add_product(apples(), dec!(2.5), dec!(1.99), dec!(4.975));

        let text = ReceiptPrinter::new().print_receipt(&receipt);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].len(), 40);
        assert!(lines[0].starts_with("Apples"));
        assert!(lines[0].ends_with("$4.98"));
        assert_eq!(lines[1], "  $1.99 * 2.500");
    }

    #[test]
    fn test_whole_receipt_layout() {
        let mut receipt = Receipt::new();
        receipt.add_product(toothbrush(), dec!(1), dec!(0.99), dec!(0.99));
        receipt.add_product(apples(), dec!(2.5), dec!(1.99), dec!(4.975));
        receipt.add_discount(Discount::new(toothbrush(), "3 for 2", dec!(-0.99)).unwrap());

        let text = ReceiptPrinter::new().print_receipt(&receipt);
        let expected = format!(
            concat!(
                "Toothbrush{a}$0.99\n",
                "Apples{b}$4.98\n",
                "  $1.99 * 2.500\n",
                "3 for 2 (Toothbrush){c}$-0.99\n",
                "Total:{d}$4.98\n",
            ),
            a = " ".repeat(25),
            b = " ".repeat(29),
            c = " ".repeat(14),
            d = " ".repeat(29),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_column_width() {
        let mut receipt = Receipt::new();
        receipt.add_product(toothbrush(), dec!(1), dec!(0.99), dec!(0.99));

        let text = ReceiptPrinter::with_columns(20).print_receipt(&receipt);
        for line in text.lines() {
            assert_eq!(line.len(), 20);
        }
    }
}
