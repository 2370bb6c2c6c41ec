//! Base58 account addresses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Address format version understood by this wallet
pub const ADDRESS_VERSION: u8 = 0x01;

/// Decoded address length: version, chain id, 20 byte key hash, 4 byte checksum
pub const ADDRESS_LENGTH: usize = 26;

/// Errors raised while parsing an address
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is not valid base58: {0}")]
    InvalidBase58(String),

    #[error("address must decode to 26 bytes, got {0}")]
    InvalidLength(usize),

    #[error("unsupported address version {0:#04x}")]
    UnsupportedVersion(u8),
}

/// An account address in its base58 text form.
///
/// Parsing checks the decoded layout only; checksum verification belongs to
/// the wallet that derived the address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    encoded: String,
    chain_id: u8,
}

impl Address {
    /// Parses a base58 address
    pub fn parse(value: &str) -> Result<Self, AddressError> {
        let bytes = bs58::decode(value)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

        if bytes.len() != ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        if bytes[0] != ADDRESS_VERSION {
            return Err(AddressError::UnsupportedVersion(bytes[0]));
        }

        Ok(Self {
            encoded: value.to_string(),
            chain_id: bytes[1],
        })
    }

    /// Network byte embedded in the address (`b'L'` mainnet, `b'T'` testnet)
    pub fn chain_id(&self) -> u8 {
        self.chain_id
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Address::parse(&value).map_err(serde::de::Error::custom)
    }
}
