//! # Domain Types
//!
//! Product model for the stationery shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │  ─────────────────────────────────────────────                          │
//! │  code (lookup key)   name   category   brand   stock   price            │
//! │  kind ──┬── Physical                                                    │
//! │         └── Virtual { download_link }                                   │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                      │
//! │  │     Category        │   │       Brand         │                      │
//! │  │  Reading            │   │  Artesco            │                      │
//! │  │  Writing            │   │  FaberCastell       │                      │
//! │  │  Coloring ★ 10% off │   │  Ove                │                      │
//! │  │  Erasers            │   │  Universal          │                      │
//! │  │  Accessories        │   │  Staedtler          │                      │
//! │  │  Filing             │   │  Standford          │                      │
//! │  │  PaperAndNotebooks  │   └─────────────────────┘                      │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are built once when the inventory is seeded and never change
//! afterwards. No field is validated here: a negative price or stock is
//! stored as given.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// What a product is used for. Drives discount eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Reading,
    Writing,
    /// The only discountable category.
    Coloring,
    Erasers,
    Accessories,
    Filing,
    PaperAndNotebooks,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Reading => "Reading",
            Category::Writing => "Writing",
            Category::Coloring => "Coloring",
            Category::Erasers => "Erasers",
            Category::Accessories => "Accessories",
            Category::Filing => "Filing",
            Category::PaperAndNotebooks => "Paper and notebooks",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Brand
// =============================================================================

/// Brand tag. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    #[default]
    Artesco,
    FaberCastell,
    Ove,
    Universal,
    Staedtler,
    Standford,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Brand::Artesco => "Artesco",
            Brand::FaberCastell => "Faber-Castell",
            Brand::Ove => "OVE",
            Brand::Universal => "Universal",
            Brand::Staedtler => "Staedtler",
            Brand::Standford => "Standford",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Variant-specific part of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    /// A shelf item with stock on hand.
    Physical,
    /// A downloadable item. Stock is not meaningful.
    Virtual { download_link: String },
}

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, used as the lookup key.
    pub code: String,

    /// Display name.
    pub name: String,

    pub category: Category,

    pub brand: Brand,

    /// Units on hand. Informational only.
    pub stock: i64,

    pub price: Money,

    #[serde(flatten)]
    pub kind: ProductKind,
}

impl Product {
    /// Creates a physical product.
    pub fn physical(
        code: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        brand: Brand,
        stock: i64,
        price: Money,
    ) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            category,
            brand,
            stock,
            price,
            kind: ProductKind::Physical,
        }
    }

    /// Creates a virtual (downloadable) product.
    ///
    /// Category and brand take their defaults and stock is zero; use struct
    /// update syntax when a virtual product needs something else.
    pub fn new_virtual(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        download_link: impl Into<String>,
    ) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            category: Category::default(),
            brand: Brand::default(),
            stock: 0,
            price,
            kind: ProductKind::Virtual {
                download_link: download_link.into(),
            },
        }
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        matches!(self.kind, ProductKind::Virtual { .. })
    }

    pub fn download_link(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Physical => None,
            ProductKind::Virtual { download_link } => Some(download_link),
        }
    }

    /// Human-readable description of the product.
    ///
    /// Physical products show category, brand and stock; virtual products
    /// show the download link instead.
    pub fn describe(&self) -> String {
        match &self.kind {
            ProductKind::Physical => format!(
                "[Physical] Code: {} | Name: {} | Category: {} | Brand: {} | Stock: {} | Price: {}",
                self.code, self.name, self.category, self.brand, self.stock, self.price
            ),
            ProductKind::Virtual { download_link } => format!(
                "[Virtual] Code: {} | Name: {} | Price: {} | Link: {}",
                self.code, self.name, self.price, download_link
            ),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook() -> Product {
        Product::physical(
            "P001",
            "Cuaderno A4",
            Category::PaperAndNotebooks,
            Brand::Artesco,
            50,
            Money::from_cents(500),
        )
    }

    #[test]
    fn test_describe_physical() {
        assert_eq!(
            notebook().describe(),
            "[Physical] Code: P001 | Name: Cuaderno A4 | Category: Paper and notebooks \
             | Brand: Artesco | Stock: 50 | Price: S/. 5.00"
        );
    }

    #[test]
    fn test_describe_virtual() {
        let ebook = Product::new_virtual(
            "V001",
            "E-book",
            Money::from_cents(1000),
            "http://descarga.com/ebook",
        );
        assert_eq!(
            ebook.to_string(),
            "[Virtual] Code: V001 | Name: E-book | Price: S/. 10.00 | Link: http://descarga.com/ebook"
        );
        assert!(ebook.is_virtual());
        assert_eq!(ebook.download_link(), Some("http://descarga.com/ebook"));
        assert_eq!(ebook.category, Category::Reading);
        assert_eq!(ebook.stock, 0);
    }

    #[test]
    fn test_physical_has_no_link() {
        let product = notebook();
        assert!(!product.is_virtual());
        assert_eq!(product.download_link(), None);
    }

    #[test]
    fn test_negative_values_are_kept() {
        let odd = Product::physical(
            "NEG",
            "Broken",
            Category::Erasers,
            Brand::Ove,
            -3,
            Money::from_cents(-100),
        );
        assert_eq!(odd.stock, -3);
        assert_eq!(odd.price.cents(), -100);
    }

    #[test]
    fn test_serde_shape() {
        let ebook = Product::new_virtual("V001", "E-book", Money::from_cents(1000), "http://x");
        let json = serde_json::to_value(&ebook).unwrap();
        assert_eq!(json["kind"], "virtual");
        assert_eq!(json["download_link"], "http://x");
        assert_eq!(json["price"], 1000);
        assert_eq!(json["category"], "reading");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, ebook);
    }
}
