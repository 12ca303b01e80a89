//! # Discount Policy
//!
//! The shop's single pricing rule: coloring goods are 10% off.
//!
//! ```text
//! Product { category, price }
//!      │
//!      ▼
//! category == policy.category ?
//!      │ yes                      │ no
//!      ▼                          ▼
//! price - round(price × bps)      price
//! ```
//!
//! Cart lines are marked down as a whole (`price × quantity`), so a line
//! total is exactly 90% of its undiscounted amount whenever that amount is a
//! whole number of centimos. Only the unit price shown to the user is rounded
//! on its own.
//!
//! The rule is stateless. The only side effect is a tracing event when the
//! markdown fires, which the console shows as a notification.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::money::Money;
use crate::types::{Category, Product};

/// Markdown for coloring goods, in basis points (1000 = 10%).
pub const COLORING_DISCOUNT_BPS: u32 = 1000;

/// Category-based markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    /// The discountable category.
    pub category: Category,
    /// Markdown in basis points.
    pub discount_bps: u32,
}

impl DiscountPolicy {
    /// Policy with a custom rate for the coloring category.
    pub const fn coloring(discount_bps: u32) -> Self {
        DiscountPolicy {
            category: Category::Coloring,
            discount_bps,
        }
    }

    #[inline]
    pub fn applies_to(&self, product: &Product) -> bool {
        product.category == self.category && self.discount_bps > 0
    }

    /// Returns the unit price the customer pays for `product`.
    pub fn apply(&self, product: &Product) -> Money {
        self.apply_to_line(product, 1)
    }

    /// Returns what the customer pays for `quantity` units of `product`.
    ///
    /// The markdown is taken from the line amount, not from the rounded unit
    /// price: 100 units at S/. 1.25 cost S/. 112.50, not 100 × S/. 1.12.
    pub fn apply_to_line(&self, product: &Product, quantity: i64) -> Money {
        let gross = product.price * quantity;
        if !self.applies_to(product) {
            return gross;
        }

        let discounted = gross.apply_percentage_discount(self.discount_bps);
        info!(
            code = %product.code,
            quantity,
            bps = self.discount_bps,
            from = gross.cents(),
            to = discounted.cents(),
            "{}% discount applied",
            self.discount_bps as f64 / 100.0
        );
        discounted
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        DiscountPolicy::coloring(COLORING_DISCOUNT_BPS)
    }
}

/// Applies the default policy (10% off coloring goods).
///
/// ```rust
/// use stationer_core::{apply_discount, Brand, Category, Money, Product};
///
/// let crayons = Product::physical("C01", "Crayons", Category::Coloring, Brand::FaberCastell, 10, Money::from_cents(1000));
/// assert_eq!(apply_discount(&crayons).cents(), 900);
/// ```
pub fn apply_discount(product: &Product) -> Money {
    DiscountPolicy::default().apply(product)
}
