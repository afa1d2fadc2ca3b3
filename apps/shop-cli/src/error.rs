//! # Shell Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Bad text at a prompt ──► message printed, back to the menu            │
//! │  CoreError (cart rule) ─► message printed, back to the menu            │
//! │  InputClosed (EOF) ─────► session ends normally                        │
//! │  Io / Config / Catalog ─► ShellError ──► anyhow context ──► exit code  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use shop_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading or writing the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The configured catalog file could not be read.
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ShellError::CatalogFile {
            path: PathBuf::from("/tmp/missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read catalog file /tmp/missing.json: no such file"
        );

        let err: ShellError = CoreError::CartEmpty.into();
        assert_eq!(err.to_string(), "Your cart is empty.");
    }
}
