//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (Console Shell)                  │   │
//! │  │    read line ──► parse ──► basket ──► receipt ──► stdout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   parse   │  │  basket   │  │   │
//! │  │   │ Category  │  │   Money   │  │ LineItem  │  │  Basket   │  │   │
//! │  │   │  lookup   │  │ rounding  │  │  parser   │  │  (order)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │    tax    │  │  receipt  │                                 │   │
//! │  │   │  LineTax  │  │ formatter │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product categories and the static catalog lookup
//! - [`money`] - Money type and the round-up-to-nearest-0.05 tax rule
//! - [`basket`] - Line items and the ordered basket
//! - [`parse`] - Free-text line item parser
//! - [`tax`] - Per-item tax assessment (sales tax + import duty)
//! - [`receipt`] - Receipt formatting and totals
//! - [`error`] - Parse error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, network, file system access is FORBIDDEN here
//! 3. **Faithful Arithmetic**: Tax math is IEEE floating point with cents
//!    truncation - the exact figures on the receipt depend on it
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{parse_line_item, Basket, Catalog, format_receipt};
//!
//! let catalog = Catalog::standard();
//! let mut basket = Basket::new();
//!
//! let item = parse_line_item("1 music CD at 14.99", &catalog).unwrap();
//! basket.add(item);
//!
//! let receipt = format_receipt(&basket);
//! assert_eq!(receipt, "1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 16.49\n");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod error;
pub mod money;
pub mod parse;
pub mod receipt;
pub mod tax;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use basket::{Basket, LineItem};
pub use catalog::{Catalog, ProductCategory};
pub use error::ParseError;
pub use money::Money;
pub use parse::parse_line_item;
pub use receipt::{format_receipt, ReceiptTotals};
pub use tax::{assess, LineTax};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basic sales tax rate: 10% on all goods except exempt categories.
///
/// ## Business Reason
/// Books, food, and medical products are exempt; everything else
/// (including uncatalogued products) pays this rate.
pub const SALES_TAX_RATE: f64 = 0.10;

/// Import duty rate: 5% on all imported goods, with no exemptions.
pub const IMPORT_DUTY_RATE: f64 = 0.05;

/// Tax amounts round UP to the nearest multiple of this many cents.
///
/// ## Business Reason
/// For a tax rate of n%, a shelf price of p contains (np/100 rounded up
/// to the nearest 0.05) amount of tax.
pub const TAX_ROUNDING_UNIT_CENTS: i64 = 5;
