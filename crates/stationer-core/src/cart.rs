//! # Shopping Cart
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action             Cart Method              State Change          │
//! │  ───────────             ───────────              ────────────          │
//! │                                                                         │
//! │  Add product ──────────► add_item() ────────────► line.qty += q         │
//! │                                                   or lines.push(line)   │
//! │                                                                         │
//! │  View cart ────────────► summary() ─────────────► (read only)           │
//! │                                                                         │
//! │  Pay ──────────────────► checkout() ────────────► (read only)           │
//! │                            └─► PaymentProcessor::process_payment        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product code (adding the same code again increases
//!   the quantity)
//! - Lines are never removed and the cart is not cleared after payment, so a
//!   second checkout charges the same total again

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::discount::DiscountPolicy;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::payment::{PaymentConfirmation, PaymentProcessor};
use crate::types::Product;

/// One (product, quantity) association in the cart.
///
/// The product is a snapshot taken when it was first added; the line is
/// identified by `product.code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    #[inline]
    pub fn code(&self) -> &str {
        &self.product.code
    }
}

/// A cart line with prices resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    pub code: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// Unit price after the discount policy, rounded to whole centimos.
    pub discounted_unit_price: Money,
    /// `unit_price × quantity` with the markdown taken from the whole line.
    pub subtotal: Money,
}

impl LineSummary {
    /// Whether the discount policy lowered this line.
    pub fn is_discounted(&self) -> bool {
        self.subtotal != self.unit_price * self.quantity
    }
}

/// Everything shown to the user before paying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: Vec<LineSummary>,
    pub total: Money,
    /// When the cart was opened.
    pub created_at: DateTime<Utc>,
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    pub summary: CartSummary,
    pub confirmation: PaymentConfirmation,
}

/// The shopping cart.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    policy: DiscountPolicy,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart with the default discount policy.
    pub fn new() -> Self {
        Cart::with_policy(DiscountPolicy::default())
    }

    pub fn with_policy(policy: DiscountPolicy) -> Self {
        Cart {
            lines: Vec::new(),
            policy,
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of `product`.
    ///
    /// ## Behavior
    /// - Product code already in cart: quantity is increased
    /// - Otherwise: a new line is appended
    ///
    /// The quantity is not checked here; callers validate it first
    /// (see [`crate::validation::validate_quantity`]).
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.code == product.code) {
            line.quantity += quantity;
            debug!(code = %product.code, quantity = line.quantity, "cart line increased");
            return;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        debug!(code = %product.code, quantity, "cart line added");
    }

    /// Sum of the discounted line amounts.
    pub fn compute_total(&self) -> Money {
        self.lines
            .iter()
            .map(|line| self.policy.apply_to_line(&line.product, line.quantity))
            .sum()
    }

    /// Lines with their discounted subtotals, plus the total.
    pub fn summary(&self) -> CartSummary {
        let lines: Vec<LineSummary> = self
            .lines
            .iter()
            .map(|line| LineSummary {
                code: line.product.code.clone(),
                name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: line.product.price,
                discounted_unit_price: self.policy.apply(&line.product),
                subtotal: self.policy.apply_to_line(&line.product, line.quantity),
            })
            .collect();
        let total: Money = lines.iter().map(|l| l.subtotal).sum();

        CartSummary {
            lines,
            total,
            created_at: self.created_at,
        }
    }

    /// Charges the cart total through `processor`.
    ///
    /// ## Returns
    /// - `Err(CoreError::EmptyCart)` when there is nothing to pay for; the
    ///   processor is not called
    /// - `Ok(Checkout)` otherwise, after exactly one `process_payment` call
    ///   with the cart total
    pub fn checkout<P: PaymentProcessor + ?Sized>(&self, processor: &P) -> CoreResult<Checkout> {
        if self.is_empty() {
            info!("checkout refused: cart is empty");
            return Err(CoreError::EmptyCart);
        }

        let summary = self.summary();
        info!(
            lines = summary.lines.len(),
            total = summary.total.cents(),
            "checking out"
        );
        let confirmation = processor.process_payment(summary.total);

        Ok(Checkout {
            summary,
            confirmation,
        })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity currently in the cart for `code` (0 when absent).
    pub fn quantity_of(&self, code: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.code() == code)
            .map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units over all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn policy(&self) -> DiscountPolicy {
        self.policy
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::payment::PaymentGateway;
    use crate::types::{Brand, Category};
    use proptest::prelude::*;
    use std::cell::RefCell;

    /// Records every charge instead of confirming silently.
    #[derive(Default)]
    struct RecordingProcessor {
        charges: RefCell<Vec<Money>>,
    }

    impl PaymentProcessor for RecordingProcessor {
        fn process_payment(&self, amount: Money) -> PaymentConfirmation {
            self.charges.borrow_mut().push(amount);
            PaymentConfirmation::new("Recorder", amount)
        }
    }

    fn product(code: &str, category: Category, major: i64) -> Product {
        Product::physical(
            code,
            format!("Product {}", code),
            category,
            Brand::Artesco,
            10,
            Money::from_major_minor(major, 0),
        )
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.compute_total().is_zero());
        assert!(cart.summary().lines.is_empty());
    }

    #[test]
    fn test_non_discountable_scenario() {
        let mut inventory = Inventory::new();
        inventory.insert(product("P001", Category::PaperAndNotebooks, 5));

        let mut cart = Cart::new();
        cart.add_item(inventory.find_by_code("P001").unwrap(), 3);

        assert_eq!(cart.compute_total(), Money::from_major_minor(15, 0));
    }

    #[test]
    fn test_discountable_scenario() {
        let mut inventory = Inventory::new();
        inventory.insert(product("P002", Category::Coloring, 10));

        let mut cart = Cart::new();
        cart.add_item(inventory.find_by_code("P002").unwrap(), 2);

        // 10 × 0.9 × 2
        assert_eq!(cart.compute_total(), Money::from_major_minor(18, 0));
    }

    #[test]
    fn test_same_product_aggregates_into_one_line() {
        let mut cart = Cart::new();
        let pen = product("P002", Category::Writing, 1);

        cart.add_item(&pen, 2);
        cart.add_item(&pen, 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("P002"), 5);
        assert_eq!(cart.quantity_of("nope"), 0);
    }

    #[test]
    fn test_lines_keep_first_add_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("B", Category::Writing, 1), 1);
        cart.add_item(&product("A", Category::Writing, 1), 1);
        cart.add_item(&product("B", Category::Writing, 1), 1);

        let codes: Vec<&str> = cart.lines().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["B", "A"]);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_summary_lines() {
        let mut cart = Cart::new();
        cart.add_item(&product("C1", Category::Coloring, 10), 2);
        cart.add_item(&product("N1", Category::Filing, 4), 1);

        let summary = cart.summary();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].unit_price.cents(), 1000);
        assert_eq!(summary.lines[0].discounted_unit_price.cents(), 900);
        assert_eq!(summary.lines[0].subtotal.cents(), 1800);
        assert_eq!(summary.lines[1].subtotal.cents(), 400);
        assert_eq!(summary.total, cart.compute_total());
        assert_eq!(summary.total.cents(), 2200);
        assert!(summary.lines[0].is_discounted());
        assert!(!summary.lines[1].is_discounted());
        assert_eq!(summary.created_at, cart.created_at());
    }

    #[test]
    fn test_discount_does_not_drift_with_quantity() {
        let mut cart = Cart::new();
        let crayons = Product {
            price: Money::from_cents(125),
            ..product("C1", Category::Coloring, 0)
        };
        cart.add_item(&crayons, 100);

        assert_eq!(cart.compute_total().cents(), 11250);
        let summary = cart.summary();
        assert_eq!(summary.lines[0].discounted_unit_price.cents(), 112);
        assert_eq!(summary.lines[0].subtotal.cents(), 11250);
    }

    #[test]
    fn test_checkout_empty_cart_does_not_charge() {
        let cart = Cart::new();
        let processor = RecordingProcessor::default();

        let result = cart.checkout(&processor);

        assert!(matches!(result, Err(CoreError::EmptyCart)));
        assert!(processor.charges.borrow().is_empty());
    }

    #[test]
    fn test_checkout_charges_total_once() {
        let mut cart = Cart::new();
        cart.add_item(&product("C1", Category::Coloring, 10), 2);
        cart.add_item(&product("P1", Category::Writing, 5), 3);
        let processor = RecordingProcessor::default();

        let checkout = cart.checkout(&processor).unwrap();

        assert_eq!(*processor.charges.borrow(), vec![cart.compute_total()]);
        assert_eq!(checkout.confirmation.amount, cart.compute_total());
        assert_eq!(checkout.summary, cart.summary());
    }

    #[test]
    fn test_cart_is_not_cleared_after_checkout() {
        let mut cart = Cart::new();
        cart.add_item(&product("P1", Category::Writing, 5), 1);
        let processor = RecordingProcessor::default();

        cart.checkout(&processor).unwrap();
        cart.checkout(&processor).unwrap();

        assert!(!cart.is_empty());
        assert_eq!(
            *processor.charges.borrow(),
            vec![Money::from_cents(500), Money::from_cents(500)]
        );
    }

    #[test]
    fn test_checkout_with_gateway() {
        let mut cart = Cart::new();
        cart.add_item(&product("P1", Category::Writing, 5), 2);

        let checkout = cart.checkout(&PaymentGateway::Plin).unwrap();
        assert_eq!(checkout.confirmation.gateway, "Plin");
        assert_eq!(checkout.confirmation.amount.cents(), 1000);
    }

    #[test]
    fn test_custom_policy() {
        let mut cart = Cart::with_policy(DiscountPolicy::coloring(5000));
        cart.add_item(&product("C1", Category::Coloring, 10), 1);
        assert_eq!(cart.compute_total().cents(), 500);
        assert_eq!(cart.policy().discount_bps, 5000);
    }

    #[test]
    fn test_summary_serializes() {
        let mut cart = Cart::new();
        cart.add_item(&product("C1", Category::Coloring, 10), 1);

        let json = serde_json::to_value(cart.summary()).unwrap();
        assert_eq!(json["total"], 900);
        assert_eq!(json["lines"][0]["code"], "C1");
    }

    proptest! {
        #[test]
        fn prop_repeated_adds_aggregate(q1 in 1i64..500, q2 in 1i64..500) {
            let mut cart = Cart::new();
            let pen = product("P1", Category::Writing, 2);
            cart.add_item(&pen, q1);
            cart.add_item(&pen, q2);

            prop_assert_eq!(cart.line_count(), 1);
            prop_assert_eq!(cart.quantity_of("P1"), q1 + q2);
            prop_assert_eq!(cart.compute_total(), Money::from_cents(200 * (q1 + q2)));
        }

        #[test]
        fn prop_coloring_total_is_ninety_percent(cents in 0i64..100_000, q in 1i64..1000) {
            let mut cart = Cart::new();
            let crayons = Product {
                price: Money::from_cents(cents),
                ..product("C1", Category::Coloring, 0)
            };
            cart.add_item(&crayons, q);

            // 0.9 × p × q, in tenths of a centimo
            let exact_tenths = 9 * cents * q;
            let total_tenths = cart.compute_total().cents() * 10;
            if exact_tenths % 10 == 0 {
                prop_assert_eq!(total_tenths, exact_tenths);
            } else {
                prop_assert!((total_tenths - exact_tenths).abs() <= 5);
            }
            prop_assert_eq!(cart.summary().total, cart.compute_total());
        }
    }
}
