//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the whole pricing
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Tally Architecture                       │
//! │                                                             │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │                apps/register (binary)               │    │
//! │  │       seeds catalog ─► rings up cart ─► prints      │    │
//! │  └──────────────────────────┬──────────────────────────┘    │
//! │                             │                               │
//! │  ┌──────────────────────────▼──────────────────────────┐    │
//! │  │            ★ tally-core (THIS CRATE) ★              │    │
//! │  │                                                     │    │
//! │  │  ┌─────────┐ ┌────────┐ ┌──────┐ ┌───────┐          │    │
//! │  │  │ catalog │ │ offers │ │ cart │ │teller │          │    │
//! │  │  └─────────┘ └────────┘ └──────┘ └───────┘          │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────────────┐        │    │
//! │  │  │  types  │ │ receipt │ │     printer     │        │    │
//! │  │  └─────────┘ └─────────┘ └─────────────────┘        │    │
//! │  │                                                     │    │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value objects (Product, ProductQuantity, Discount)
//! - [`offers`] - Special offer kinds and the discount engine
//! - [`catalog`] - The `Catalog` trait and in-memory implementation
//! - [`cart`] - Shopping cart bookkeeping and offer application
//! - [`receipt`] - Itemized receipt with the clamped total
//! - [`teller`] - Checkout orchestration
//! - [`printer`] - Fixed-width text rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every checkout is a deterministic, finite computation
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Decimal Money**: All prices, quantities and discounts are
//!    `rust_decimal::Decimal` - binary floating point never touches money
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tally_core::{
//!     Catalog, MemoryCatalog, Product, ProductUnit, ReceiptPrinter, ShoppingCart,
//!     SpecialOfferType, Teller,
//! };
//!
//! let brush = Product::new("toothbrush", "Toothbrush", ProductUnit::Each)?;
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_product(brush.clone(), dec!(0.99))?;
//!
//! let mut teller = Teller::new(&catalog);
//! teller.add_special_offer(SpecialOfferType::ThreeForTwo, brush.clone(), dec!(10))?;
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item_quantity(brush, dec!(3))?;
//!
//! let receipt = teller.checks_out_articles_from(&cart)?;
//! assert_eq!(receipt.total_price(), dec!(1.98));
//!
//! println!("{}", ReceiptPrinter::new().print_receipt(&receipt));
//! # Ok::<(), tally_core::CheckoutError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod offers;
pub mod printer;
pub mod receipt;
pub mod teller;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Teller` instead of
// `use tally_core::teller::Teller`

pub use cart::ShoppingCart;
pub use catalog::{Catalog, MemoryCatalog};
pub use error::{CheckoutError, CheckoutResult, ValidationError, ValidationResult};
pub use offers::{Offer, SpecialOfferType};
pub use printer::{ReceiptPrinter, DEFAULT_COLUMNS};
pub use receipt::{Receipt, ReceiptItem};
pub use teller::Teller;
pub use types::{Discount, Product, ProductQuantity, ProductUnit};
