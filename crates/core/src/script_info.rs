//! Script metadata as reported by a public node.

use crate::Address;
use serde::{Deserialize, Serialize};

/// Script attached to an address.
///
/// `script` is `None` (or empty) when the account has no script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptInfo {
    pub address: Address,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub complexity: u64,
    #[serde(default)]
    pub extra_fee: u64,
}

impl ScriptInfo {
    /// Info for an address without a script
    pub fn empty(address: Address) -> Self {
        Self {
            address,
            script: None,
            complexity: 0,
            extra_fee: 0,
        }
    }

    pub fn with_script(address: Address, script: impl Into<String>) -> Self {
        Self {
            script: Some(script.into()),
            ..Self::empty(address)
        }
    }

    /// True when a non-empty script is installed
    pub fn has_script(&self) -> bool {
        self.script.as_deref().is_some_and(|script| !script.is_empty())
    }
}

/// Output of the node's script compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledScript {
    /// Base64 encoded script bytes
    pub script: String,
    #[serde(default)]
    pub complexity: u64,
    #[serde(default)]
    pub extra_fee: u64,
}

impl CompiledScript {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            complexity: 0,
            extra_fee: 0,
        }
    }
}
