//! Shell configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                     | Default     | Meaning                         |
//! |------------------------------|-------------|---------------------------------|
//! | `SHOP_STORE_NAME`            | `the Shop`  | Name in the welcome banner      |
//! | `SHOP_CART_LIFETIME_MINUTES` | `30`        | Minutes until the cart expires  |
//! | `SHOP_CATALOG_PATH`          | (built-in)  | JSON catalog file               |
//! | `SHOP_LOG` / `RUST_LOG`      | `warn`      | tracing filter directives       |

use std::env;
use std::path::PathBuf;

use chrono::Duration;
use shop_core::validation::validate_cart_lifetime_minutes;
use shop_core::DEFAULT_CART_LIFETIME_MINUTES;

/// Console shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Store name shown in the welcome banner
    pub store_name: String,

    /// Minutes from cart creation until checkout is refused
    pub cart_lifetime_minutes: i64,

    /// Optional JSON catalog replacing the built-in products
    pub catalog_path: Option<PathBuf>,

    /// tracing-subscriber filter directives
    pub log_filter: String,
}

impl ShellConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// `load()` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShellConfig::default();

        let cart_lifetime_minutes = match lookup("SHOP_CART_LIFETIME_MINUTES") {
            Some(raw) => {
                let minutes: i64 = raw.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue("SHOP_CART_LIFETIME_MINUTES".to_string())
                })?;
                validate_cart_lifetime_minutes(minutes).map_err(|_| {
                    ConfigError::InvalidValue("SHOP_CART_LIFETIME_MINUTES".to_string())
                })?;
                minutes
            }
            None => defaults.cart_lifetime_minutes,
        };

        let store_name = match lookup("SHOP_STORE_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("SHOP_STORE_NAME".to_string()));
            }
            Some(name) => name.trim().to_string(),
            None => defaults.store_name,
        };

        let catalog_path = lookup("SHOP_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("SHOP_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or(defaults.log_filter);

        Ok(ShellConfig {
            store_name,
            cart_lifetime_minutes,
            catalog_path,
            log_filter,
        })
    }

    /// Cart lifetime as a chrono duration.
    pub fn cart_lifetime(&self) -> Duration {
        Duration::minutes(self.cart_lifetime_minutes)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            store_name: "the Shop".to_string(),
            cart_lifetime_minutes: DEFAULT_CART_LIFETIME_MINUTES,
            catalog_path: None,
            log_filter: "warn".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ShellConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ShellConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.cart_lifetime(), Duration::minutes(30));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHOP_STORE_NAME", "  Corner Store "),
            ("SHOP_CART_LIFETIME_MINUTES", "5"),
            ("SHOP_CATALOG_PATH", "/tmp/catalog.json"),
            ("SHOP_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.store_name, "Corner Store");
        assert_eq!(config.cart_lifetime_minutes, 5);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = load(&[("RUST_LOG", "info")]).unwrap();
        assert_eq!(config.log_filter, "info");

        let config = load(&[("RUST_LOG", "info"), ("SHOP_LOG", "trace")]).unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_lifetime() {
        for bad in ["abc", "0", "-10", ""] {
            assert_eq!(
                load(&[("SHOP_CART_LIFETIME_MINUTES", bad)]).unwrap_err(),
                ConfigError::InvalidValue("SHOP_CART_LIFETIME_MINUTES".to_string()),
                "value {bad:?}"
            );
        }
    }

    #[test]
    fn test_blank_values() {
        assert!(load(&[("SHOP_STORE_NAME", "   ")]).is_err());

        let config = load(&[("SHOP_CATALOG_PATH", "")]).unwrap();
        assert_eq!(config.catalog_path, None);
    }
}
