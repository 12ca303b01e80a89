//! Menu text: option parsing and outcome rendering.
//!
//! Nothing here reads or writes; [`crate::shell`] owns the I/O.

use stationer_core::{CartSummary, CoreError, Outcome, PaymentGateway, Role};

pub const ROLE_PROMPT: &str = "Select your role:\n1. Supplier\n2. Customer\n3. Seller\nOption: ";
pub const OPTION_PROMPT: &str = "Option: ";
pub const CODE_PROMPT: &str = "Product code: ";
pub const QUANTITY_PROMPT: &str = "Quantity: ";

pub const INVALID_ROLE: &str = "Invalid role. Exiting.";
pub const INVALID_OPTION: &str = "Invalid option";
pub const INVALID_QUANTITY: &str = "Invalid quantity";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const GOODBYE: &str = "Thank you for using the system";

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListProducts,
    FindProduct,
    AddToCart,
    ShowCart,
    Pay,
    DescribeRoles,
    Exit,
}

impl MenuOption {
    const ORDER: [MenuOption; 7] = [
        MenuOption::ListProducts,
        MenuOption::FindProduct,
        MenuOption::AddToCart,
        MenuOption::ShowCart,
        MenuOption::Pay,
        MenuOption::DescribeRoles,
        MenuOption::Exit,
    ];

    fn number(&self) -> u8 {
        match self {
            MenuOption::ListProducts => 1,
            MenuOption::FindProduct => 2,
            MenuOption::AddToCart => 3,
            MenuOption::ShowCart => 4,
            MenuOption::Pay => 5,
            MenuOption::DescribeRoles => 6,
            MenuOption::Exit => 7,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MenuOption::ListProducts => "View products",
            MenuOption::FindProduct => "Find product by code",
            MenuOption::AddToCart => "Add product to cart",
            MenuOption::ShowCart => "View cart",
            MenuOption::Pay => "Pay",
            MenuOption::DescribeRoles => "View order handling by role",
            MenuOption::Exit => "Exit",
        }
    }

    fn visible_to(&self, role: Role) -> bool {
        match self {
            MenuOption::ListProducts | MenuOption::FindProduct | MenuOption::Exit => true,
            _ => role.can_shop(),
        }
    }

    /// Parses a menu answer. Options hidden from `role` parse as `None`.
    pub fn parse(input: &str, role: Role) -> Option<MenuOption> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ORDER
            .into_iter()
            .find(|option| option.number() == number)
            .filter(|option| option.visible_to(role))
    }
}

/// The main menu as shown to `role`.
pub fn render_main_menu(role: Role) -> String {
    let mut out = String::from("\n===== MAIN MENU =====\n");
    for option in MenuOption::ORDER.iter().filter(|o| o.visible_to(role)) {
        out.push_str(&format!("{}. {}\n", option.number(), option.label()));
    }
    out
}

/// The payment prompt, numbered the way `PaymentGateway::from_menu_choice` reads it.
pub fn render_payment_prompt() -> String {
    let options: Vec<String> = PaymentGateway::ALL
        .iter()
        .enumerate()
        .map(|(i, gateway)| format!("{}. {}", i + 1, gateway))
        .collect();
    format!("Payment method: {}\n{}", options.join("  "), OPTION_PROMPT)
}

pub fn render_cart(summary: &CartSummary) -> String {
    let mut out = String::from("\nShopping Cart:\n");
    for line in &summary.lines {
        out.push_str(&format!(
            "{} x {} - Total: {}",
            line.name, line.quantity, line.subtotal
        ));
        if line.is_discounted() {
            out.push_str(" (discount applied)");
        }
        out.push('\n');
    }
    out.push_str(&format!("Total: {}", summary.total));
    out
}

/// Text shown for a command's outcome.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Products(products) => {
            let mut out = String::from("\n--- Full Inventory ---");
            for product in products {
                out.push('\n');
                out.push_str(&product.describe());
            }
            out
        }
        Outcome::Product(Some(product)) => product.describe(),
        Outcome::Product(None) => PRODUCT_NOT_FOUND.to_string(),
        Outcome::Added { .. } => "Product added to cart".to_string(),
        Outcome::Cart(summary) => render_cart(summary),
        Outcome::CheckedOut(checkout) => {
            format!("{}\n{}", render_cart(&checkout.summary), checkout.confirmation)
        }
        Outcome::Roles(roles) => {
            let mut out = String::from("\n=== Order handling by role ===");
            for (_, description) in roles {
                out.push('\n');
                out.push_str(description);
            }
            out
        }
        Outcome::Exit => GOODBYE.to_string(),
    }
}

/// Text shown for a refused command.
pub fn render_error(err: &CoreError) -> String {
    match err {
        CoreError::ProductNotFound(_) => PRODUCT_NOT_FOUND.to_string(),
        CoreError::Validation(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
