//! The interactive loop.
//!
//! ## Flow
//! ```text
//! role prompt ──► invalid? ──► "Invalid role" and stop
//!      │
//!      ▼
//! role description
//!      │
//!      ▼
//! ┌──► main menu ──► option ──► extra prompts ──► Command ──► Session
//! │                                                             │
//! └──────────────── render Outcome / CoreError ◄────────────────┘
//! ```
//!
//! Generic over the reader and writer so tests can drive it with byte
//! buffers. End of input is treated like choosing "Exit".

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use stationer_core::validation::parse_quantity;
use stationer_core::{Cart, Command, Inventory, Outcome, PaymentGateway, Role, Session};

use crate::config::CliConfig;
use crate::menu::{self, MenuOption};

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: CliConfig) -> Self {
        Shell {
            input,
            output,
            config,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let Some(answer) = self.prompt(menu::ROLE_PROMPT)? else {
            return Ok(());
        };
        let role = match Role::from_menu_choice(&answer) {
            Ok(role) => role,
            Err(_) => {
                writeln!(self.output, "{}", menu::INVALID_ROLE)?;
                return Ok(());
            }
        };
        info!(%role, "role selected");
        writeln!(self.output, "{}", role.describe_order_handling())?;

        let inventory = if self.config.seed_catalog {
            Inventory::seeded()
        } else {
            Inventory::new()
        };
        let cart = Cart::with_policy(self.config.discount_policy());
        let mut session = Session::new(inventory, cart, role);

        loop {
            write!(self.output, "{}", menu::render_main_menu(role))?;
            let Some(answer) = self.prompt(menu::OPTION_PROMPT)? else {
                writeln!(self.output, "{}", menu::GOODBYE)?;
                return Ok(());
            };

            let Some(option) = MenuOption::parse(&answer, role) else {
                writeln!(self.output, "{}", menu::INVALID_OPTION)?;
                continue;
            };

            let Some(command) = self.read_command(option, &session)? else {
                continue;
            };

            match session.execute(command) {
                Ok(Outcome::Exit) => {
                    writeln!(self.output, "{}", menu::GOODBYE)?;
                    return Ok(());
                }
                Ok(Outcome::CheckedOut(checkout)) if self.config.json_output => {
                    writeln!(self.output, "{}", serde_json::to_string_pretty(&checkout)?)?;
                }
                Ok(outcome) => writeln!(self.output, "{}", menu::render_outcome(&outcome))?,
                Err(err) => {
                    debug!(error = %err, "command refused");
                    writeln!(self.output, "{}", menu::render_error(&err))?;
                }
            }
        }
    }

    /// Collects whatever extra input `option` needs and builds its command.
    ///
    /// Returns `None` when the answer was already handled here (unknown
    /// product, bad quantity) or input ended mid-prompt.
    fn read_command(&mut self, option: MenuOption, session: &Session) -> Result<Option<Command>> {
        let command = match option {
            MenuOption::ListProducts => Command::ListProducts,
            MenuOption::FindProduct => match self.prompt(menu::CODE_PROMPT)? {
                Some(code) => Command::FindProduct(code),
                None => return Ok(None),
            },
            MenuOption::AddToCart => {
                let Some(code) = self.prompt(menu::CODE_PROMPT)? else {
                    return Ok(None);
                };
                let code = code.trim().to_string();
                if session.inventory().find_by_code(&code).is_none() {
                    writeln!(self.output, "{}", menu::PRODUCT_NOT_FOUND)?;
                    return Ok(None);
                }

                let Some(raw_quantity) = self.prompt(menu::QUANTITY_PROMPT)? else {
                    return Ok(None);
                };
                match parse_quantity(&raw_quantity) {
                    Ok(quantity) => Command::AddToCart { code, quantity },
                    Err(err) => {
                        debug!(error = %err, input = %raw_quantity.trim(), "quantity rejected");
                        writeln!(self.output, "{}", menu::INVALID_QUANTITY)?;
                        return Ok(None);
                    }
                }
            }
            MenuOption::ShowCart => Command::ShowCart,
            MenuOption::Pay => match self.prompt(&menu::render_payment_prompt())? {
                Some(choice) => Command::Checkout(PaymentGateway::from_menu_choice(&choice)),
                None => return Ok(None),
            },
            MenuOption::DescribeRoles => Command::DescribeRoles,
            MenuOption::Exit => Command::Exit,
        };
        Ok(Some(command))
    }

    /// Writes `text` and reads one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, config: CliConfig) -> String {
        let mut output = Vec::new();
        Shell::new(script.as_bytes(), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_invalid_role_stops() {
        let out = run_script("9\n", CliConfig::default());
        assert!(out.ends_with("Invalid role. Exiting.\n"));
        assert!(!out.contains("MAIN MENU"));
    }

    #[test]
    fn test_customer_buys_and_pays() {
        let script = "2\n3\nP001\n3\n3\nP002\n2\n5\n1\n7\n";
        let out = run_script(script, CliConfig::default());

        assert!(out.contains("Customer places an order from the shopping cart."));
        assert!(out.contains("Cuaderno A4 x 3 - Total: S/. 15.00"));
        assert!(out.contains("Lapicero Azul x 2 - Total: S/. 2.40"));
        assert!(out.contains("Total: S/. 17.40"));
        assert!(out.contains("Payment of S/. 17.40 made with Yape."));
        assert!(out.ends_with("Thank you for using the system\n"));
    }

    #[test]
    fn test_supplier_hidden_options_report_invalid_option() {
        let out = run_script("1\n3\n1\n7\n", CliConfig::default());

        assert!(out.contains("Supplier ships products into the inventory."));
        assert!(out.contains("Invalid option"));
        assert!(out.contains("[Virtual] Code: V001"));
        assert!(!out.contains("Add product to cart"));
    }

    #[test]
    fn test_bad_input_is_reported() {
        let script = "2\n2\nX\n3\nX\n3\n\n3\nP001\nzero\n4\n5\n2\n";
        let out = run_script(script, CliConfig::default());

        // "X" twice, then an empty code
        assert_eq!(out.matches("Product not found").count(), 3);
        assert!(out.contains("Invalid quantity"));
        assert_eq!(
            out.matches("Cart is empty. Add products before continuing").count(),
            2
        );
        // input runs out at the next menu prompt
        assert!(out.ends_with("Thank you for using the system\n"));
    }

    #[test]
    fn test_empty_inventory_and_json_checkout() {
        let config = CliConfig {
            seed_catalog: false,
            ..CliConfig::default()
        };
        let out = run_script("3\n1\n2\nP001\n7\n", config);
        assert!(out.contains("--- Full Inventory ---"));
        assert!(!out.contains("[Physical]"));
        assert!(out.contains("Product not found"));

        let config = CliConfig {
            json_output: true,
            ..CliConfig::default()
        };
        let out = run_script("2\n3\nV001\n1\n5\n2\n7\n", config);
        assert!(out.contains("\"gateway\": \"Plin\""));
        assert!(out.contains("\"total\": 1000"));
    }

    #[test]
    fn test_large_quantity_is_accepted() {
        let out = run_script("2\n3\nP001\n1000\n4\n7\n", CliConfig::default());
        assert!(out.contains("Cuaderno A4 x 1000 - Total: S/. 5000.00"));
        assert!(!out.contains("Invalid quantity"));
    }

    #[test]
    fn test_role_overview() {
        let out = run_script("3\n6\n7\n", CliConfig::default());
        assert!(out.contains("=== Order handling by role ==="));
        assert!(out.contains("Seller reviews and validates orders for dispatch."));
    }
}
