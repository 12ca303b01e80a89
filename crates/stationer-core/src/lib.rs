//! # stationer-core: Pure Business Logic for the Stationery Shop
//!
//! Inventory, cart, discount, payment and role logic with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stationer Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stationer-cli (console menu)                    │   │
//! │  │     text ──► menu::parse ──► Command        Outcome ──► print   │   │
//! │  └─────────────────────────────┬───────────────────────▲───────────┘   │
//! │                                │                       │                │
//! │  ┌─────────────────────────────▼───────────────────────┴───────────┐   │
//! │  │               ★ stationer-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │ inventory │  │   cart    │  │  payment  │   │   │
//! │  │   │  Product  │  │ Inventory │  │   Cart    │  │  Gateway  │   │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘   │   │
//! │  │                                       │                         │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────▼─────┐  ┌───────────┐   │   │
//! │  │   │   money   │  │   role    │  │ discount  │  │  session  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO PERSISTENCE                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Category, Brand
//! - [`money`] - Money type with integer arithmetic
//! - [`discount`] - The coloring-goods markdown
//! - [`inventory`] - Ordered product store
//! - [`cart`] - Cart lines, totals and checkout
//! - [`payment`] - Payment gateways
//! - [`role`] - User roles
//! - [`session`] - Command dispatch for drivers
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stationer_core::{Cart, Inventory, PaymentGateway};
//!
//! let inventory = Inventory::seeded();
//! let mut cart = Cart::new();
//! cart.add_item(inventory.find_by_code("P001").unwrap(), 3);
//!
//! let checkout = cart.checkout(&PaymentGateway::Yape).unwrap();
//! assert_eq!(checkout.confirmation.amount.cents(), 1500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod inventory;
pub mod money;
pub mod payment;
pub mod role;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSummary, Checkout, LineSummary};
pub use discount::{apply_discount, DiscountPolicy, COLORING_DISCOUNT_BPS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use payment::{PaymentConfirmation, PaymentGateway, PaymentProcessor};
pub use role::Role;
pub use session::{Command, Outcome, Session};
pub use types::*;
