//! # Product Catalog
//!
//! Product categories and the static name → category lookup.
//!
//! ## Classification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Classification                               │
//! │                                                                         │
//! │  "music CD" ──► Catalog::category_of ──► Other   ──► sales taxable     │
//! │  "book"     ──► Catalog::category_of ──► Book    ──► exempt            │
//! │  "widget"   ──► Catalog::category_of ──► Other   ──► sales taxable     │
//! │                        (not found defaults to Other)                    │
//! │                                                                         │
//! │  Lookup is EXACT MATCH on the trimmed product name:                    │
//! │  case-sensitive, inner whitespace significant                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Product Category
// =============================================================================

/// The tax category of a product.
///
/// Books, food, and medical products are exempt from basic sales tax.
/// `Other` is the catch-all for everything else, including products the
/// catalog has never heard of, and is the only category that pays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Printed books.
    Book,
    /// Food products.
    Food,
    /// Medical products.
    Medical,
    /// Everything else - the only sales-taxable category.
    Other,
}

impl ProductCategory {
    /// Checks whether products in this category are exempt from basic
    /// sales tax. Import duty has no exemptions and ignores this.
    #[inline]
    pub const fn is_sales_tax_exempt(&self) -> bool {
        !matches!(self, ProductCategory::Other)
    }
}

/// Unknown products default to the catch-all category.
impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::Other
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Static mapping from product name to tax category.
///
/// ## Invariants
/// - Fixed at construction, immutable afterwards
/// - Lookup is exact match on the trimmed product name
/// - Names absent from the catalog classify as [`ProductCategory::Other`]
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<&'static str, ProductCategory>,
}

impl Catalog {
    /// Builds the standard product catalog.
    ///
    /// | Product name             | Category |
    /// |--------------------------|----------|
    /// | book                     | book     |
    /// | music CD                 | other    |
    /// | chocolate bar            | food     |
    /// | box of chocolates        | food     |
    /// | bottle of perfume        | other    |
    /// | packet of headache pills | medical  |
    pub fn standard() -> Self {
        let entries = HashMap::from([
            ("book", ProductCategory::Book),
            ("music CD", ProductCategory::Other),
            ("chocolate bar", ProductCategory::Food),
            ("box of chocolates", ProductCategory::Food),
            ("bottle of perfume", ProductCategory::Other),
            ("packet of headache pills", ProductCategory::Medical),
        ]);

        Catalog { entries }
    }

    /// Returns the category for a product name.
    ///
    /// Names not present in the catalog classify as
    /// [`ProductCategory::Other`], which makes them sales-taxable.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::catalog::{Catalog, ProductCategory};
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.category_of("book"), ProductCategory::Book);
    /// assert_eq!(catalog.category_of("widget"), ProductCategory::Other);
    /// ```
    pub fn category_of(&self, product: &str) -> ProductCategory {
        self.entries.get(product).copied().unwrap_or_default()
    }

    /// Returns the number of catalogued products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
