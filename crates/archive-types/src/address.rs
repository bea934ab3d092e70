//! # Address
//!
//! 20-byte account/contract address with hex parsing.
//!
//! Addresses are not case-sensitive identifiers: the wallet agent and the
//! contract may report the same address with different hex casing (EIP-55
//! checksum casing vs. lowercase). Parsing normalizes to bytes, so two
//! textual forms of the same address always compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 20-byte Ethereum-style address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

/// Placeholder contract address used when no deployment is configured.
///
/// Every path that resolves the NewsArchive deployment falls back to this
/// single constant; a divergent fallback per call site would silently split
/// traffic across different (likely nonexistent) deployments.
pub const FALLBACK_CONTRACT_ADDRESS: Address = Address([
    0x16, 0xf5, 0x2e, 0x32, 0x7e, 0x57, 0xce, 0xb1, 0x24, 0xdb, 0x33, 0x53, 0x06, 0xc3, 0xe1,
    0x5d, 0x4e, 0xf5, 0x65, 0x0b,
]);

/// Errors from parsing a textual address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressParseError {
    /// Input is not 20 bytes of hex (with or without a 0x prefix).
    #[error("Invalid address length: expected 40 hex chars, got {0}")]
    InvalidLength(usize),

    /// Input contains non-hex characters.
    #[error("Invalid hex in address: {0}")]
    InvalidHex(String),
}

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Parses a 0x-prefixed (or bare) hex address, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, AddressParseError> {
        let hex_part = s.strip_prefix("0x").unwrap_or(s);
        if hex_part.len() != 40 {
            return Err(AddressParseError::InvalidLength(hex_part.len()));
        }
        let bytes = hex::decode(hex_part)
            .map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        // decode of 40 hex chars always yields 20 bytes
        Self::from_slice(&bytes).ok_or(AddressParseError::InvalidLength(hex_part.len()))
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Lowercase 0x-prefixed hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}
