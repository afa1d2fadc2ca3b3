//! # Console Session
//!
//! Owns the cart for one run and drives the main menu.
//!
//! ## Session State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session<'a, C, K>                               │
//! │                                                                         │
//! │   catalog: &'a Catalog ──────┐                                          │
//! │                              │ borrowed by every CartItem               │
//! │   cart: Cart<'a> ◄───────────┘                                          │
//! │   console: C   (impl Console)                                           │
//! │   clock: K     (impl Clock)   ── "now" for expiry and receipts          │
//! │                                                                         │
//! │   run():  welcome ──► loop { menu ──► choice ──► command } ──► Exit/EOF │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use shop_core::{Cart, Catalog};
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::commands;
use crate::config::ShellConfig;
use crate::console::Console;
use crate::error::{ShellError, ShellResult};
use crate::prompt::ask;
use crate::render;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddProduct,
    RemoveProduct,
    ViewCart,
    Checkout,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ViewProducts),
            "2" => Ok(MenuChoice::AddProduct),
            "3" => Ok(MenuChoice::RemoveProduct),
            "4" => Ok(MenuChoice::ViewCart),
            "5" => Ok(MenuChoice::Checkout),
            "6" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuChoice::ViewProducts => "view_products",
            MenuChoice::AddProduct => "add_product",
            MenuChoice::RemoveProduct => "remove_product",
            MenuChoice::ViewCart => "view_cart",
            MenuChoice::Checkout => "checkout",
            MenuChoice::Exit => "exit",
        };
        f.write_str(name)
    }
}

/// Whether the menu loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive shopping session.
pub struct Session<'a, C, K> {
    catalog: &'a Catalog,
    cart: Cart<'a>,
    console: C,
    clock: K,
    store_name: String,
}

impl<'a, C: Console, K: Clock> Session<'a, C, K> {
    /// Creates a session whose cart starts now and lives for the configured
    /// number of minutes.
    pub fn new(catalog: &'a Catalog, config: &ShellConfig, console: C, clock: K) -> Self {
        let cart = Cart::with_lifetime(clock.now(), config.cart_lifetime());
        debug!(expires_at = %cart.expires_at(), "Cart created");

        Session {
            catalog,
            cart,
            console,
            clock,
            store_name: config.store_name.clone(),
        }
    }

    /// Runs the menu until "Exit" or end of input.
    ///
    /// End of input at any prompt ends the session normally; only console
    /// I/O failures are returned as errors.
    pub fn run(&mut self) -> ShellResult<()> {
        self.console.write_line(&render::welcome(&self.store_name))?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Exit chosen");
                    return Ok(());
                }
                Err(ShellError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Shows the menu, reads one choice and runs it.
    fn step(&mut self) -> ShellResult<Flow> {
        self.console.write_line("")?;
        self.console.write_line(&render::main_menu())?;

        let raw = ask(&mut self.console, render::MENU_PROMPT)?;
        let Ok(choice) = raw.parse::<MenuChoice>() else {
            warn!(input = %raw.trim(), "Unknown menu option");
            self.console.write_line(render::INVALID_OPTION)?;
            return Ok(Flow::Continue);
        };

        debug!(%choice, "Menu choice");
        match choice {
            MenuChoice::ViewProducts => commands::view_products(&mut self.console, self.catalog)?,
            MenuChoice::AddProduct => {
                commands::add_products(&mut self.console, self.catalog, &mut self.cart)?
            }
            MenuChoice::RemoveProduct => commands::remove_products(&mut self.console, &mut self.cart)?,
            MenuChoice::ViewCart => commands::view_cart(&mut self.console, &self.cart)?,
            MenuChoice::Checkout => {
                let now = self.clock.now();
                commands::checkout(&mut self.console, self.catalog, &mut self.cart, now)?
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::console::TextConsole;
    use chrono::Duration;
    use shop_core::ProductId;
    use std::io::Cursor;

    type ScriptConsole = TextConsole<Cursor<String>, Vec<u8>>;

    fn scripted(script: &str) -> ScriptConsole {
        TextConsole::new(Cursor::new(script.to_string()), Vec::new())
    }

    fn finish(session: Session<'_, ScriptConsole, &ManualClock>) -> String {
        String::from_utf8(session.into_console().into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(" 1 ".parse::<MenuChoice>(), Ok(MenuChoice::ViewProducts));
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("7".parse::<MenuChoice>().is_err());
        assert!("checkout".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_welcome_uses_store_name() {
        let catalog = Catalog::builtin();
        let clock = ManualClock::at("2026-03-01T12:00:00Z");
        let config = ShellConfig {
            store_name: "Corner Store".to_string(),
            ..ShellConfig::default()
        };

        let mut session = Session::new(&catalog, &config, scripted("6\n"), &clock);
        session.run().unwrap();

        let output = finish(session);
        assert!(output.contains("Welcome to Corner Store!"));
        assert!(output.contains("~:~(Shopping Cart)~:~"));
    }

    #[test]
    fn test_invalid_option_returns_to_menu() {
        let catalog = Catalog::builtin();
        let clock = ManualClock::at("2026-03-01T12:00:00Z");
        let config = ShellConfig::default();

        let mut session = Session::new(&catalog, &config, scripted("9\nhello\n6\n"), &clock);
        session.run().unwrap();

        let output = finish(session);
        assert_eq!(output.matches(render::INVALID_OPTION).count(), 2);
        assert_eq!(output.matches("ENTER CHOICE").count(), 3);
    }

    #[test]
    fn test_full_shopping_run() {
        let catalog = Catalog::builtin();
        let clock = ManualClock::at("2026-03-01T12:00:00Z");
        let config = ShellConfig::default();

        // View, add 2 keyboards + 1 monitor, remove a keyboard, view, checkout twice, exit
        let script = "1\n2\n5\n2\nyes\n4\n1\nno\n3\n5\n1\nno\n4\n5\n5\n6\n";
        let mut session = Session::new(&catalog, &config, scripted(script), &clock);
        clock.advance(Duration::minutes(10));
        session.run().unwrap();

        assert!(session.cart().is_empty());
        let output = finish(session);

        assert!(output.contains("5. Keyboard - $49.99 (Accessories)"));
        assert!(output.contains("2x Keyboard added to the cart."));
        assert!(output.contains("1x Monitor added to the cart."));
        assert!(output.contains("Removed 1x Keyboard from the cart (1 left)."));
        assert!(output.contains("Keyboard x 1 - $49.99"));
        assert!(output.contains("Monitor x 1 - $299.99"));

        // 349.98 subtotal, no discount, 28.00 tax (27.9984 rounded)
        assert!(output.contains("Subtotal: $349.98"));
        assert!(output.contains("Discount (0%): -$0.00"));
        assert!(output.contains("Tax (8%): $28.00"));
        assert!(output.contains("Total: $377.98"));
        assert!(output.contains("Checkout Date and Time: 2026-03-01 12:10:00 UTC"));
        assert!(output.contains("Laptop Bag - $49.99 (Accessories)"));

        // Second checkout sees the emptied cart
        assert!(output.ends_with(&format!(
            "{}\n\n{}\n{}",
            render::EMPTY_CART,
            render::main_menu(),
            render::MENU_PROMPT
        )));
    }

    #[test]
    fn test_expired_cart_keeps_items() {
        let catalog = Catalog::builtin();
        let clock = ManualClock::at("2026-03-01T12:00:00Z");
        let config = ShellConfig::default();

        let mut session = Session::new(&catalog, &config, scripted("2\n8\n1\nno\n5\n"), &clock);
        clock.advance(Duration::minutes(31));
        session.run().unwrap();

        assert_eq!(session.cart().quantity_of(ProductId::new(8)), Some(1));
        let output = finish(session);
        assert!(output.contains("Your cart has expired. Please start a new order."));
        assert!(!output.contains("Thank you for your purchase!"));
    }

    #[test]
    fn test_configured_lifetime() {
        let catalog = Catalog::builtin();
        let clock = ManualClock::at("2026-03-01T12:00:00Z");
        let config = ShellConfig {
            cart_lifetime_minutes: 5,
            ..ShellConfig::default()
        };

        let session = Session::new(&catalog, &config, scripted(""), &clock);
        assert_eq!(
            session.cart().expires_at() - session.cart().created_at(),
            Duration::minutes(5)
        );
    }

    #[test]
    fn test_end_of_input_mid_flow_ends_cleanly() {
        let catalog = Catalog::builtin();
        let clock = ManualClock::at("2026-03-01T12:00:00Z");
        let config = ShellConfig::default();

        let mut session = Session::new(&catalog, &config, scripted("2\n3\n"), &clock);
        assert!(session.run().is_ok());
        assert!(session.cart().is_empty());
    }
}
