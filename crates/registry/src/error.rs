//! Registry error types.

use thiserror::Error;

/// Registry errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A capability with this identifier is already registered.
    #[error("capability `{0}` is already registered")]
    Duplicate(String),

    /// A replacement provider failed during materialization.
    #[error("replacement provider for `{placeholder}` failed: {message}")]
    Provider {
        placeholder: String,
        message: String,
    },

    /// Lookup of an identifier that was never registered.
    #[error("unknown capability `{0}`")]
    Unknown(String),

    /// An identifier is empty or still contains an unresolved placeholder.
    #[error("invalid capability identifier `{id}`: {reason}")]
    InvalidId { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
