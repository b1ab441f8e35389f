//! Addon error types.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Capability registration failed during boot.
    #[error(transparent)]
    Registry(#[from] registry::Error),

    /// Failed to parse the addon config file.
    #[error("failed to parse config: {0}")]
    Config(String),

    /// Failed to parse a translation table.
    #[error("failed to parse translations: {0}")]
    Translations(String),

    /// An I/O error occurred while reading config or translations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
