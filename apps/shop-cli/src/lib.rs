//! # Shop Console Library
//!
//! Core library for the interactive shop console.
//! This is the main entry point that configures and runs the menu loop.
//!
//! ## Module Organization
//! ```text
//! shop_cli/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── config.rs       ◄─── Environment-driven configuration
//! ├── console.rs      ◄─── Injectable line-oriented input/output
//! ├── clock.rs        ◄─── Injectable "now"
//! ├── prompt.rs       ◄─── Ask / parse helpers
//! ├── render.rs       ◄─── Banners, menu, cart and receipt text
//! ├── session.rs      ◄─── Menu loop owning the cart
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── List the catalog
//! │   ├── cart.rs     ◄─── Add / remove / view
//! │   └── checkout.rs ◄─── Checkout and receipt
//! └── error.rs        ◄─── Shell error type
//! ```

pub mod clock;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;

use anyhow::Context;
use shop_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clock::SystemClock;
use config::ShellConfig;
use console::TextConsole;
use error::{ShellError, ShellResult};
use session::Session;

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • SHOP_* environment variables, defaults otherwise                  │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, override with SHOP_LOG or RUST_LOG                 │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • SHOP_CATALOG_PATH (JSON) or the built-in eight products           │
/// │                                                                         │
/// │  4. Run Session ──────────────────────────────────────────────────────► │
/// │     • Cart created with the configured lifetime                         │
/// │     • Menu loop until "Exit" or end of input                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let config = ShellConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.log_filter);

    info!(
        store = %config.store_name,
        cart_lifetime_minutes = config.cart_lifetime_minutes,
        "Starting shop console"
    );

    let catalog = load_catalog(&config).context("Failed to load catalog")?;
    info!(products = catalog.len(), "Catalog loaded");

    let mut session = Session::new(&catalog, &config, TextConsole::stdio(), SystemClock);
    session.run().context("Console session failed")?;

    info!("Shop console closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the catalog named in the configuration, or the built-in one.
pub fn load_catalog(config: &ShellConfig) -> ShellResult<Catalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::builtin());
    };

    let json = std::fs::read_to_string(path).map_err(|source| ShellError::CatalogFile {
        path: path.clone(),
        source,
    })?;

    Ok(Catalog::from_json(&json)?)
}
