//! # Inventory
//!
//! Insertion-ordered product store with lookup by code.
//!
//! Codes are expected to be unique but this is not enforced: a duplicate is
//! logged and stored, and `find_by_code` keeps answering with the first
//! product that was inserted under that code.

use tracing::{debug, warn};

use crate::money::Money;
use crate::types::{Brand, Category, Product};

/// The ordered collection holding all known products.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Inventory pre-loaded with the shop's starting catalog.
    ///
    /// | Code | Name               | Kind     | Price     |
    /// |------|--------------------|----------|-----------|
    /// | P001 | Cuaderno A4        | physical | S/. 5.00  |
    /// | P002 | Lapicero Azul      | physical | S/. 1.20  |
    /// | V001 | E-book: Aprende C# | virtual  | S/. 10.00 |
    pub fn seeded() -> Self {
        let mut inventory = Inventory::new();
        inventory.insert(Product::physical(
            "P001",
            "Cuaderno A4",
            Category::PaperAndNotebooks,
            Brand::Artesco,
            50,
            Money::from_major_minor(5, 0),
        ));
        inventory.insert(Product::physical(
            "P002",
            "Lapicero Azul",
            Category::Writing,
            Brand::Universal,
            100,
            Money::from_major_minor(1, 20),
        ));
        inventory.insert(Product::new_virtual(
            "V001",
            "E-book: Aprende C#",
            Money::from_major_minor(10, 0),
            "http://descarga.com/ebook-csharp",
        ));
        inventory
    }

    /// Appends a product. Always succeeds.
    pub fn insert(&mut self, product: Product) {
        if self.find_by_code(&product.code).is_some() {
            warn!(code = %product.code, "duplicate product code; lookups keep returning the first one");
        }
        debug!(code = %product.code, name = %product.name, "product inserted");
        self.products.push(product);
    }

    /// Linear scan for the first product with `code`.
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Extend<Product> for Inventory {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.insert(product);
        }
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.extend(iter);
        inventory
    }
}
