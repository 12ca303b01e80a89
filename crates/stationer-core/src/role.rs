//! # User Roles
//!
//! Who is at the keyboard, and what that role does with orders.
//!
//! ```text
//! Role       can_shop   describe_order_handling
//! ─────────  ────────   ────────────────────────────────────────────
//! Supplier   no         ships products into the inventory
//! Customer   yes        places an order from the shopping cart
//! Seller     yes        reviews and validates orders for dispatch
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Supplier,
    Customer,
    Seller,
}

impl Role {
    /// All roles, in the order the role prompt lists them.
    pub const ALL: [Role; 3] = [Role::Supplier, Role::Customer, Role::Seller];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Supplier => "Supplier",
            Role::Customer => "Customer",
            Role::Seller => "Seller",
        }
    }

    /// How this role takes part in order handling.
    pub fn describe_order_handling(&self) -> &'static str {
        match self {
            Role::Supplier => "Supplier ships products into the inventory.",
            Role::Customer => "Customer places an order from the shopping cart.",
            Role::Seller => "Seller reviews and validates orders for dispatch.",
        }
    }

    /// Whether the role gets the cart, payment and role-overview options.
    pub fn can_shop(&self) -> bool {
        !matches!(self, Role::Supplier)
    }

    /// Maps the role prompt answer ("1", "2", "3") to a role.
    pub fn from_menu_choice(choice: &str) -> Result<Self, CoreError> {
        match choice.trim() {
            "1" => Ok(Role::Supplier),
            "2" => Ok(Role::Customer),
            "3" => Ok(Role::Seller),
            other => Err(CoreError::InvalidChoice(format!("role '{}'", other))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "supplier" => Ok(Role::Supplier),
            "customer" => Ok(Role::Customer),
            "seller" => Ok(Role::Seller),
            other => Err(CoreError::InvalidChoice(format!(
                "unknown role '{}'. Valid options: supplier, customer, seller",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_describes_itself() {
        for role in Role::ALL {
            assert!(role.describe_order_handling().starts_with(role.label()));
        }
    }

    #[test]
    fn test_only_supplier_cannot_shop() {
        assert!(!Role::Supplier.can_shop());
        assert!(Role::Customer.can_shop());
        assert!(Role::Seller.can_shop());
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(Role::from_menu_choice("1").unwrap(), Role::Supplier);
        assert_eq!(Role::from_menu_choice(" 2\n").unwrap(), Role::Customer);
        assert_eq!(Role::from_menu_choice("3").unwrap(), Role::Seller);
        assert!(matches!(
            Role::from_menu_choice("4"),
            Err(CoreError::InvalidChoice(_))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Seller".parse::<Role>().unwrap(), Role::Seller);
        assert_eq!(" customer ".parse::<Role>().unwrap(), Role::Customer);
        assert!("admin".parse::<Role>().is_err());
    }
}
