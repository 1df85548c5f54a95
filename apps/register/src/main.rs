//! # Register: Demo Checkout
//!
//! Seeds an in-memory catalog, registers one offer of each kind, rings up a
//! sample cart and prints the receipt.
//!
//! ## Usage
//! ```bash
//! cargo run -p register
//!
//! # With debug logging from the pricing engine
//! RUST_LOG=tally=debug cargo run -p register
//! ```

use rust_decimal_macros::dec;
use tally_core::{
    Catalog, CheckoutError, MemoryCatalog, Product, ProductUnit, ReceiptPrinter, ShoppingCart,
    SpecialOfferType, Teller,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CheckoutError> {
    init_tracing();

    let toothbrush = Product::new("toothbrush", "Toothbrush", ProductUnit::Each)?;
    let apples = Product::new("apples", "Apples", ProductUnit::Kilo)?;
    let rice = Product::new("rice", "Rice", ProductUnit::Each)?;
    let toothpaste = Product::new("toothpaste", "Toothpaste", ProductUnit::Each)?;
    let tomatoes = Product::new("cherry-tomatoes", "Cherry Tomatoes", ProductUnit::Each)?;

    let mut catalog = MemoryCatalog::new();
    catalog.add_product(toothbrush.clone(), dec!(0.99))?;
    catalog.add_product(apples.clone(), dec!(1.99))?;
    catalog.add_product(rice.clone(), dec!(2.49))?;
    catalog.add_product(toothpaste.clone(), dec!(1.79))?;
    catalog.add_product(tomatoes.clone(), dec!(0.69))?;
    info!(products = catalog.len(), "catalog seeded");

    let mut teller = Teller::new(&catalog);
    teller.add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush.clone(), dec!(10))?;
    teller.add_special_offer(SpecialOfferType::TenPercentDiscount, rice.clone(), dec!(10))?;
    teller.add_special_offer(SpecialOfferType::FiveForAmount, toothpaste.clone(), dec!(7.49))?;
    teller.add_special_offer(SpecialOfferType::TwoForAmount, tomatoes.clone(), dec!(0.99))?;

    let mut cart = ShoppingCart::new();
    for _ in 0..3 {
        cart.add_item(toothbrush.clone())?;
    }
    cart.add_item_quantity(apples, dec!(2.5))?;
    cart.add_item(rice)?;
    cart.add_item_quantity(toothpaste, dec!(5))?;
    cart.add_item_quantity(tomatoes, dec!(2))?;

    let receipt = teller.checks_out_articles_from(&cart)?;
    print!("{}", ReceiptPrinter::new().print_receipt(&receipt));

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
