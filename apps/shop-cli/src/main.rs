//! # Shop Console Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (stderr)
//! 3. Load the catalog (built-in or JSON file)
//! 4. Run the menu loop on stdin/stdout

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    shop_cli::run()
}
