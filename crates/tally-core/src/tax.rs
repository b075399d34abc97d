//! # Tax Assessment Engine
//!
//! Computes sales tax and import duty for one line item.
//!
//! ## Assessment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Per-Unit Tax Assessment                             │
//! │                                                                         │
//! │  LineItem { unit_price, imported, sales_taxable }                       │
//! │       │                                                                 │
//! │       ├── imported?       ──► duty tax  = unit_price × 0.05            │
//! │       ├── sales_taxable?  ──► sales tax = unit_price × 0.10            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  raw tax = duty + sales ──► round_up_to_nearest(5 cents)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LineTax { duty_tax, sales_tax, rounded_tax, unit_price_with_tax }     │
//! │                                                                         │
//! │  Rounding happens HERE, per unit of each line item - never on the      │
//! │  aggregate. Receipt totals sum already-rounded figures.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::basket::LineItem;
use crate::money::Money;
use crate::{IMPORT_DUTY_RATE, SALES_TAX_RATE, TAX_ROUNDING_UNIT_CENTS};

// =============================================================================
// Line Tax
// =============================================================================

/// The tax assessment for a single unit of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineTax {
    /// Import duty before rounding (zero unless imported).
    pub duty_tax: Money,

    /// Basic sales tax before rounding (zero for exempt categories).
    pub sales_tax: Money,

    /// Combined tax, rounded up to the nearest 0.05.
    pub rounded_tax: Money,

    /// Unit shelf price plus rounded tax.
    pub unit_price_with_tax: Money,
}

impl LineTax {
    /// Receipt price for the whole line: (unit price + rounded tax) × quantity.
    #[inline]
    pub fn line_total(&self, quantity: i64) -> Money {
        self.unit_price_with_tax * quantity
    }

    /// Tax contribution of the whole line: rounded tax × quantity.
    #[inline]
    pub fn line_tax(&self, quantity: i64) -> Money {
        self.rounded_tax * quantity
    }
}

// =============================================================================
// Assessment
// =============================================================================

/// Assesses sales tax and import duty for one unit of a line item.
///
/// Both flags were derived at parse time, so this is pure arithmetic:
/// - import duty: flat 5% on imported items, no exemptions
/// - sales tax: flat 10% on category `Other` (everything not book, food,
///   or medical)
/// - the combined raw tax rounds up to the nearest 0.05 per the
///   truncate-then-round rule in [`Money::round_up_to_nearest`]
///
/// ## Example
/// ```rust
/// use tally_core::{assess, parse_line_item, Catalog, Money};
///
/// let catalog = Catalog::standard();
/// let item = parse_line_item("1 imported bottle of perfume at 47.50", &catalog).unwrap();
///
/// let tax = assess(&item);
/// assert_eq!(tax.rounded_tax, Money::new(7.15));
/// assert_eq!(tax.unit_price_with_tax, Money::new(54.65));
/// ```
pub fn assess(item: &LineItem) -> LineTax {
    let duty_tax = if item.imported {
        Money::new(item.unit_price.amount() * IMPORT_DUTY_RATE)
    } else {
        Money::zero()
    };

    let sales_tax = if item.sales_taxable {
        Money::new(item.unit_price.amount() * SALES_TAX_RATE)
    } else {
        Money::zero()
    };

    let rounded_tax = (duty_tax + sales_tax).round_up_to_nearest(TAX_ROUNDING_UNIT_CENTS);

    LineTax {
        duty_tax,
        sales_tax,
        rounded_tax,
        unit_price_with_tax: item.unit_price + rounded_tax,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, imported: bool, sales_taxable: bool) -> LineItem {
        LineItem {
            quantity: 1,
            product: "test".to_string(),
            unit_price: Money::new(price),
            imported,
            sales_taxable,
        }
    }

    #[test]
    fn test_exempt_domestic_item_pays_nothing() {
        let tax = assess(&item(12.49, false, false));

        assert!(tax.duty_tax.is_zero());
        assert!(tax.sales_tax.is_zero());
        assert!(tax.rounded_tax.is_zero());
        assert_eq!(tax.unit_price_with_tax, Money::new(12.49));
    }

    #[test]
    fn test_sales_tax_on_taxable_item() {
        // 14.99 × 10% = 1.499 → rounds up to 1.50
        let tax = assess(&item(14.99, false, true));

        assert!(tax.duty_tax.is_zero());
        assert_eq!(tax.rounded_tax, Money::new(1.50));
        // 14.99 + 1.50 carries a float artifact; the receipt shows 16.49
        assert_eq!(tax.unit_price_with_tax.to_string(), "16.49");
    }

    #[test]
    fn test_duty_on_imported_exempt_item() {
        // 10.00 × 5% = 0.50, already on a 0.05 boundary
        let tax = assess(&item(10.00, true, false));

        assert!(tax.sales_tax.is_zero());
        assert_eq!(tax.rounded_tax, Money::new(0.50));
        assert_eq!(tax.unit_price_with_tax, Money::new(10.50));
    }

    #[test]
    fn test_duty_and_sales_tax_combine_before_rounding() {
        // 47.50 × 15% = 7.125 → truncates to 712 cents → rounds up to 7.15
        let tax = assess(&item(47.50, true, true));

        assert_eq!(tax.rounded_tax, Money::new(7.15));
        assert_eq!(tax.unit_price_with_tax, Money::new(54.65));
    }

    #[test]
    fn test_duty_rounds_up_from_truncated_cents() {
        // 11.25 × 5% = 0.5625 → truncates to 56 cents → rounds up to 0.60
        let tax = assess(&item(11.25, true, false));

        assert_eq!(tax.rounded_tax, Money::new(0.60));
        assert_eq!(tax.unit_price_with_tax, Money::new(11.85));
    }

    #[test]
    fn test_line_extension_by_quantity() {
        let tax = assess(&item(12.49, false, false));

        assert_eq!(tax.line_total(2), Money::new(24.98));
        assert_eq!(tax.line_tax(2), Money::zero());

        let tax = assess(&item(11.25, true, false));
        assert_eq!(tax.line_tax(3).to_string(), "1.80");
    }

    #[test]
    fn test_free_item_owes_no_tax() {
        let tax = assess(&item(0.0, true, true));

        assert!(tax.rounded_tax.is_zero());
        assert!(tax.unit_price_with_tax.is_zero());
    }
}
