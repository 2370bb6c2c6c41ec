//! Authenticated wallet account.

use crate::Address;
use serde::{Deserialize, Serialize};

/// The account currently selected in the wallet.
///
/// Owned by the authentication provider; services only observe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: Address,
    /// Base58 encoded public key
    pub public_key: String,
}

impl Account {
    pub fn new(address: Address, public_key: impl Into<String>) -> Self {
        Self {
            address,
            public_key: public_key.into(),
        }
    }
}
