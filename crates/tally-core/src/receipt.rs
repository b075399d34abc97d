//! # Receipt Formatter
//!
//! Renders a basket into the final receipt text.
//!
//! ## Receipt Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Layout                                  │
//! │                                                                         │
//! │   1 imported box of chocolates: 10.50   ◄── one line per basket item,  │
//! │   1 imported bottle of perfume: 54.65       in input order             │
//! │   Sales Taxes: 7.65                     ◄── sum of rounded line taxes  │
//! │   Total: 65.15                          ◄── sum of line totals         │
//! │                                                                         │
//! │   line total = (unit price + rounded tax) × quantity                   │
//! │   "imported" is printed right after the quantity when flagged          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Formatting is a pure function of the basket: it mutates neither the
//! basket nor the catalog, and calling it twice yields identical text.

use serde::{Deserialize, Serialize};

use crate::basket::Basket;
use crate::money::Money;
use crate::tax::assess;

// =============================================================================
// Receipt Totals
// =============================================================================

/// Aggregate figures for one receipt.
///
/// Both totals sum per-line figures whose tax component was already
/// rounded; the aggregate itself is never re-rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReceiptTotals {
    /// Sum of rounded tax across all line items.
    pub sales_taxes: Money,

    /// Grand total: sum of tax-inclusive line totals.
    pub total: Money,
}

impl ReceiptTotals {
    /// Computes the totals for a basket.
    pub fn of(basket: &Basket) -> Self {
        let mut sales_taxes = Money::zero();
        let mut total = Money::zero();

        for item in basket.items() {
            let tax = assess(item);
            sales_taxes += tax.line_tax(item.quantity);
            total += tax.line_total(item.quantity);
        }

        ReceiptTotals { sales_taxes, total }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats the receipt for a basket.
///
/// One line per item in basket order, then the two summary lines. Every
/// line is newline-terminated.
///
/// ## Example
/// ```rust
/// use tally_core::{format_receipt, parse_line_item, Basket, Catalog};
///
/// let catalog = Catalog::standard();
/// let mut basket = Basket::new();
/// basket.add(parse_line_item("1 chocolate bar at 0.85", &catalog).unwrap());
///
/// assert_eq!(
///     format_receipt(&basket),
///     "1 chocolate bar: 0.85\nSales Taxes: 0.00\nTotal: 0.85\n"
/// );
/// ```
pub fn format_receipt(basket: &Basket) -> String {
    let mut out = String::new();
    let mut sales_taxes = Money::zero();
    let mut total = Money::zero();

    for item in basket.items() {
        let tax = assess(item);
        let line_total = tax.line_total(item.quantity);

        sales_taxes += tax.line_tax(item.quantity);
        total += line_total;

        if item.imported {
            out.push_str(&format!(
                "{} imported {}: {}\n",
                item.quantity, item.product, line_total
            ));
        } else {
            out.push_str(&format!("{} {}: {}\n", item.quantity, item.product, line_total));
        }
    }

    out.push_str(&format!("Sales Taxes: {}\n", sales_taxes));
    out.push_str(&format!("Total: {}\n", total));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
