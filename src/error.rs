//! Error types for faucet client operations.
//!
//! Provides strongly-typed errors for address validation and mint
//! requests using `thiserror`.

use thiserror::Error;

/// Errors that can occur while validating input or requesting a mint.
///
/// Every variant is recoverable: the form returns to an interactive
/// state after any of them.
#[derive(Debug, Error)]
pub enum FaucetError {
    /// A required form field was left empty.
    #[error("Please fill in all fields.")]
    MissingFields,

    /// The receiver address failed bech32 decoding or the prefix check.
    #[error("Invalid Terra address.")]
    InvalidAddress,

    /// The requested asset is not in the supported set.
    #[error("Unsupported asset: {asset}")]
    UnsupportedAsset { asset: String },

    /// Network or parse failure before a usable response was obtained.
    #[error("Network error: {reason}")]
    Transport { reason: String },

    /// The faucet responded with a failure status.
    #[error("Faucet request failed: {message}")]
    Server { message: String },

    /// Missing or malformed configuration.
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for faucet operations.
pub type Result<T> = core::result::Result<T, FaucetError>;
