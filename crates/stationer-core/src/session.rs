//! # Session
//!
//! One shopper's run of the shop: an inventory, a cart and the role picked at
//! start-up. Drivers hand it already-parsed [`Command`]s and render the
//! [`Outcome`] however they like.
//!
//! ## Command Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command               Needs can_shop?   Outcome                        │
//! │  ───────               ───────────────   ───────                        │
//! │  ListProducts          no                Products(Vec<Product>)         │
//! │  FindProduct(code)     no                Product(Option<Product>)       │
//! │  AddToCart{code, qty}  yes               Added{code, quantity}          │
//! │  ShowCart              yes               Cart(CartSummary)              │
//! │  Checkout(gateway)     yes               CheckedOut(Checkout)           │
//! │  DescribeRoles         yes               Roles(Vec<(Role, &str)>)       │
//! │  Exit                  no                Exit                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::cart::{Cart, CartSummary, Checkout};
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::payment::PaymentGateway;
use crate::role::Role;
use crate::types::Product;
use crate::validation::validate_quantity;

/// A request from the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListProducts,
    FindProduct(String),
    AddToCart { code: String, quantity: i64 },
    ShowCart,
    Checkout(PaymentGateway),
    DescribeRoles,
    Exit,
}

impl Command {
    /// Short verb phrase used in permission errors.
    pub fn action(&self) -> &'static str {
        match self {
            Command::ListProducts => "list products",
            Command::FindProduct(_) => "look up products",
            Command::AddToCart { .. } => "add products to the cart",
            Command::ShowCart => "view the cart",
            Command::Checkout(_) => "pay",
            Command::DescribeRoles => "view order handling by role",
            Command::Exit => "exit",
        }
    }

    /// Whether the command is limited to roles that can shop.
    pub fn requires_shopping(&self) -> bool {
        matches!(
            self,
            Command::AddToCart { .. }
                | Command::ShowCart
                | Command::Checkout(_)
                | Command::DescribeRoles
        )
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Products(Vec<Product>),
    Product(Option<Product>),
    Added { code: String, quantity: i64 },
    Cart(CartSummary),
    CheckedOut(Checkout),
    Roles(Vec<(Role, &'static str)>),
    Exit,
}

#[derive(Debug)]
pub struct Session {
    inventory: Inventory,
    cart: Cart,
    role: Role,
}

impl Session {
    pub fn new(inventory: Inventory, cart: Cart, role: Role) -> Self {
        Session {
            inventory,
            cart,
            role,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Runs one command.
    pub fn execute(&mut self, command: Command) -> CoreResult<Outcome> {
        debug!(role = %self.role, action = command.action(), "executing command");

        if command.requires_shopping() && !self.role.can_shop() {
            return Err(CoreError::NotPermitted {
                role: self.role,
                action: command.action(),
            });
        }

        match command {
            Command::ListProducts => Ok(Outcome::Products(self.inventory.list_all().to_vec())),
            Command::FindProduct(code) => Ok(Outcome::Product(
                self.inventory.find_by_code(code.trim()).cloned(),
            )),
            Command::AddToCart { code, quantity } => {
                validate_quantity(quantity)?;
                let code = code.trim();
                let product = self
                    .inventory
                    .find_by_code(code)
                    .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))?;
                self.cart.add_item(product, quantity);
                Ok(Outcome::Added {
                    code: code.to_string(),
                    quantity,
                })
            }
            Command::ShowCart => {
                if self.cart.is_empty() {
                    return Err(CoreError::EmptyCart);
                }
                Ok(Outcome::Cart(self.cart.summary()))
            }
            Command::Checkout(gateway) => Ok(Outcome::CheckedOut(self.cart.checkout(&gateway)?)),
            Command::DescribeRoles => Ok(Outcome::Roles(
                Role::ALL
                    .iter()
                    .map(|role| (*role, role.describe_order_handling()))
                    .collect(),
            )),
            Command::Exit => Ok(Outcome::Exit),
        }
    }
}
