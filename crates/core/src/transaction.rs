//! Transaction payloads exchanged with the broadcaster.

use crate::{Address, SigningCredentials};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction kinds accepted by the public node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    Transfer,
    Lease,
    CancelLeasing,
    MassTransfer,
    Data,
    SetScript,
    Anchor,
}

impl TransactionType {
    /// Numeric type id used on the wire
    pub fn type_id(self) -> u8 {
        match self {
            TransactionType::Transfer => 4,
            TransactionType::Lease => 8,
            TransactionType::CancelLeasing => 9,
            TransactionType::MassTransfer => 11,
            TransactionType::Data => 12,
            TransactionType::SetScript => 13,
            TransactionType::Anchor => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Transfer => "transfer",
            TransactionType::Lease => "lease",
            TransactionType::CancelLeasing => "cancelLeasing",
            TransactionType::MassTransfer => "massTransfer",
            TransactionType::Data => "data",
            TransactionType::SetScript => "setScript",
            TransactionType::Anchor => "anchor",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a set-script transaction.
///
/// An empty `script` clears the account script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScriptPayload {
    pub script: String,
    pub fee: u64,
}

impl SetScriptPayload {
    pub fn install(script: impl Into<String>, fee: u64) -> Self {
        Self {
            script: script.into(),
            fee,
        }
    }

    pub fn remove(fee: u64) -> Self {
        Self {
            script: String::new(),
            fee,
        }
    }

    pub fn clears_script(&self) -> bool {
        self.script.is_empty()
    }
}

/// Set-script transaction ready to be signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub version: u8,
    pub sender: Address,
    pub sender_public_key: String,
    pub fee: u64,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub script: Option<String>,
}

impl UnsignedTransaction {
    pub const SET_SCRIPT_VERSION: u8 = 1;

    pub fn set_script(
        payload: &SetScriptPayload,
        credentials: &SigningCredentials,
        timestamp: i64,
    ) -> Self {
        Self {
            tx_type: TransactionType::SetScript.type_id(),
            version: Self::SET_SCRIPT_VERSION,
            sender: credentials.address().clone(),
            sender_public_key: credentials.public_key().to_string(),
            fee: payload.fee,
            timestamp,
            script: (!payload.clears_script()).then(|| payload.script.clone()),
        }
    }
}

/// Signed transaction as posted to the broadcast endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub transaction: UnsignedTransaction,
    pub proofs: Vec<String>,
}

/// Node acknowledgement of an accepted transaction.
///
/// Acceptance means the node relayed it, not that it was mined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResult {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: u8,
    #[serde(default)]
    pub sender: Option<Address>,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
