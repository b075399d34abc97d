//! # Line Item Parser
//!
//! Turns one raw input line into a structured [`LineItem`].
//!
//! ## Parsing Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │             "1 imported box of chocolates at 10.00"                     │
//! │                                                                         │
//! │  1. split on literal " at "                                             │
//! │     ├── head:  "1 imported box of chocolates"                          │
//! │     └── price: "10.00"  ──► f64, must be finite and >= 0               │
//! │                                                                         │
//! │  2. detect "imported" SUBSTRING in head, remove first occurrence       │
//! │     └── head:  "1  box of chocolates"     imported = true              │
//! │                                                                         │
//! │  3. split head at first whitespace                                     │
//! │     ├── quantity: "1"  ──► i64 (sign unchecked)                        │
//! │     └── product:  "box of chocolates" (trimmed)                        │
//! │                                                                         │
//! │  4. catalog lookup ──► sales_taxable = (category == Other)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Loosenesses (kept on purpose)
//! The parser reproduces the checkout terminal's long-standing behavior
//! exactly, including its loose edges:
//! - `"imported"` is matched as a substring, not a whole word, anywhere
//!   before the price separator
//! - the quantity may be any integer; zero and negatives are accepted
//! - a head segment starting with whitespace (e.g. when the `imported`
//!   token came first) yields an empty quantity token, which fails as a
//!   quantity error rather than being re-trimmed
//! Callers that need stricter rules must layer them on top.

use crate::basket::LineItem;
use crate::catalog::Catalog;
use crate::error::{ParseError, ParseResult};
use crate::money::Money;

/// Literal separator between the item description and its price.
const PRICE_SEPARATOR: &str = " at ";

/// Literal token flagging an item as imported.
const IMPORTED_TOKEN: &str = "imported";

/// Parses one trimmed input line into a [`LineItem`].
///
/// The catalog is consulted exactly once, here, to derive the
/// `sales_taxable` flag; absence from the catalog classifies the product
/// as `Other` and therefore taxable.
///
/// ## Errors
/// - [`ParseError::Format`] - missing or malformed `" at "` separator,
///   empty head segment, or no quantity / product name split
/// - [`ParseError::Price`] - price segment not a valid non-negative decimal
/// - [`ParseError::Quantity`] - quantity token not a valid integer
///
/// ## Example
/// ```rust
/// use tally_core::{parse_line_item, Catalog};
///
/// let catalog = Catalog::standard();
/// let item = parse_line_item("1 imported bottle of perfume at 47.50", &catalog).unwrap();
///
/// assert_eq!(item.quantity, 1);
/// assert_eq!(item.product, "bottle of perfume");
/// assert!(item.imported);
/// assert!(item.sales_taxable);
/// ```
pub fn parse_line_item(raw: &str, catalog: &Catalog) -> ParseResult<LineItem> {
    let line = raw.trim();

    // Stage 1: exactly one " at " separator, price on the right.
    let mut segments = line.split(PRICE_SEPARATOR);
    let (head, price_segment) = match (segments.next(), segments.next(), segments.next()) {
        (Some(head), Some(price), None) => (head, price),
        _ => {
            return Err(ParseError::Format {
                reason: "missing or malformed ' at ' separator",
            })
        }
    };

    let price_token = price_segment.trim();
    let price: f64 = price_token.parse().map_err(|_| ParseError::Price {
        input: price_token.to_string(),
    })?;
    if !price.is_finite() || price < 0.0 {
        return Err(ParseError::Price {
            input: price_token.to_string(),
        });
    }

    // Stage 2: the head carries quantity, optional imported flag, and name.
    if head.is_empty() {
        return Err(ParseError::Format {
            reason: "missing quantity and product name before ' at '",
        });
    }

    let imported = head.contains(IMPORTED_TOKEN);
    let head = if imported {
        head.replacen(IMPORTED_TOKEN, "", 1)
    } else {
        head.to_string()
    };

    // Stage 3: quantity token runs up to the first whitespace; the head is
    // deliberately not re-trimmed first (see module docs).
    let (quantity_token, name_rest) =
        head.split_once(char::is_whitespace)
            .ok_or(ParseError::Format {
                reason: "missing quantity before the product name",
            })?;

    let quantity: i64 = quantity_token.parse().map_err(|_| ParseError::Quantity {
        input: quantity_token.to_string(),
    })?;

    let product = name_rest.trim().to_string();

    // Stage 4: classify once; the flag travels with the item from here on.
    let sales_taxable = !catalog.category_of(&product).is_sales_tax_exempt();

    Ok(LineItem {
        quantity,
        product,
        unit_price: Money::new(price),
        imported,
        sales_taxable,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
