//! Predefined account scripts offered by the wallet.
//!
//! The lock templates block outgoing value transfers until `expireTime`
//! (milliseconds since epoch). The mainnet variants also block set-script
//! transactions, so the lock cannot be lifted early; the testnet variants
//! leave set-script open for experimentation.

use lto_config::NetworkType;
use serde::Serialize;

/// A named script in the catalog.
///
/// An empty `value` is the "no script" entry used to remove a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptTemplate {
    pub label: &'static str,
    pub value: &'static str,
}

impl ScriptTemplate {
    /// True for the catalog entry that removes the current script
    pub fn is_delete(&self) -> bool {
        self.value.is_empty()
    }
}

const ADVISOR_LOCK: &str = r#"let expireTime = 1565992800000
let transactionType = match tx {
  case t:TransferTransaction => false
  case t:MassTransferTransaction => false
  case t:SetScriptTransaction => false
  case _ => true
}

if (expireTime < tx.timestamp) then transactionType
else true
"#;

const TEAM_LOCK: &str = r#"let expireTime = 1579215600000
let transactionType = match tx {
  case t:TransferTransaction => false
  case t:MassTransferTransaction => false
  case t:SetScriptTransaction => false
  case _ => true
}

if (expireTime < tx.timestamp) then transactionType
else true
"#;

const ADVISOR_LOCK_TESTNET: &str = r#"let expireTime = 1565992800000
let transactionType = match tx {
  case t:TransferTransaction => false
  case t:MassTransferTransaction => false
  case _ => true
}

if (expireTime < tx.timestamp) then transactionType
else true
"#;

const TEAM_LOCK_TESTNET: &str = r#"let expireTime = 1579215600000
let transactionType = match tx {
  case t:TransferTransaction => false
  case t:MassTransferTransaction => false
  case _ => true
}

if (expireTime < tx.timestamp) then transactionType
else true
"#;

pub const DELETE: ScriptTemplate = ScriptTemplate {
    label: "Delete",
    value: "",
};

pub const MAINNET_TEMPLATES: &[ScriptTemplate] = &[
    ScriptTemplate {
        label: "Advisor lock",
        value: ADVISOR_LOCK,
    },
    ScriptTemplate {
        label: "Team lock",
        value: TEAM_LOCK,
    },
    DELETE,
];

pub const TESTNET_TEMPLATES: &[ScriptTemplate] = &[
    ScriptTemplate {
        label: "Advisor lock",
        value: ADVISOR_LOCK_TESTNET,
    },
    ScriptTemplate {
        label: "Team lock",
        value: TEAM_LOCK_TESTNET,
    },
    DELETE,
];

/// Catalog shown for `network`
pub fn templates_for(network: NetworkType) -> &'static [ScriptTemplate] {
    match network {
        NetworkType::MainNet => MAINNET_TEMPLATES,
        NetworkType::TestNet => TESTNET_TEMPLATES,
    }
}

/// Looks a template up by label
pub fn find<'a>(templates: &'a [ScriptTemplate], label: &str) -> Option<&'a ScriptTemplate> {
    templates.iter().find(|template| template.label == label)
}
