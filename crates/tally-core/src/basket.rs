//! # Basket Module
//!
//! Line items and the ordered basket for one receipt session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Basket Lifecycle                                  │
//! │                                                                         │
//! │  session start ──► Basket::new()                                       │
//! │                                                                         │
//! │  each input line ──► parse ──► LineItem ──► basket.add(item)           │
//! │                                                                         │
//! │  blank line ──► format_receipt(&basket) ──► basket dropped             │
//! │                                                                         │
//! │  APPEND ONLY: insertion order equals receipt order                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One parsed product entry: quantity, name, unit price, and tax flags.
///
/// ## Design Notes
/// - Created by the parser, immutable afterwards
/// - `sales_taxable` is derived once at parse time from the catalog lookup,
///   so tax assessment never needs the catalog again
/// - `quantity` is a plain i64: the parser accepts any integer, including
///   non-positive ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Number of units purchased.
    pub quantity: i64,

    /// Trimmed product name, exactly as entered.
    pub product: String,

    /// Price of a single unit, before tax.
    pub unit_price: Money,

    /// Whether the item is imported (pays 5% import duty).
    pub imported: bool,

    /// Whether the item pays 10% basic sales tax (category `Other`).
    pub sales_taxable: bool,
}

// =============================================================================
// Basket
// =============================================================================

/// The ordered collection of parsed line items for one receipt session.
///
/// ## Invariants
/// - Append only: items are never reordered or removed
/// - Basket order equals input order equals receipt order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Basket {
    items: Vec<LineItem>,
}

impl Basket {
    /// Creates a new empty basket.
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    /// Appends a line item and returns the running item count.
    pub fn add(&mut self, item: LineItem) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
