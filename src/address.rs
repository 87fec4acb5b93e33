//! Bech32 address decoding and validation.
//!
//! Terra (and other Cosmos SDK chains) encode account addresses as
//! classic bech32 strings: a human-readable network prefix, a `1`
//! separator, and a base32 payload covered by the embedded checksum.

use bech32::{FromBase32, Variant};

use crate::error::{FaucetError, Result};

/// A successfully decoded bech32 address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Human-readable network prefix, e.g. `"terra"`.
    pub prefix: String,
    /// Raw payload bytes (20 bytes for Cosmos account addresses).
    pub payload: Vec<u8>,
}

/// Decode a bech32 address string and verify its checksum.
///
/// Only the classic `Bech32` variant is accepted; Cosmos account
/// addresses do not use `Bech32m`. Any malformed input (bad character
/// set, bad checksum, missing separator, empty string) maps to
/// [`FaucetError::InvalidAddress`] rather than panicking.
pub fn decode_address(address: &str) -> Result<DecodedAddress> {
    let (prefix, data, variant) =
        bech32::decode(address).map_err(|_| FaucetError::InvalidAddress)?;

    if variant != Variant::Bech32 {
        return Err(FaucetError::InvalidAddress);
    }

    let payload = Vec::<u8>::from_base32(&data).map_err(|_| FaucetError::InvalidAddress)?;

    Ok(DecodedAddress { prefix, payload })
}

/// Check whether `address` is a checksum-valid bech32 address carrying
/// exactly `expected_prefix`.
///
/// Pure and deterministic; decoding failures of any kind return `false`.
pub fn is_valid_address(address: &str, expected_prefix: &str) -> bool {
    match decode_address(address) {
        Ok(decoded) => decoded.prefix == expected_prefix,
        Err(_) => false,
    }
}
