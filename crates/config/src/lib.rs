//! LTO Configuration Module
//!
//! Configuration types for wallet-side script management: which network the
//! wallet talks to, how to reach its public node, the default set-script fee
//! and logging preferences. Everything can be read from a TOML file; every
//! section is optional.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Fee for installing a script, in minimal units (0.01 LTO)
pub const DEFAULT_SET_SCRIPT_FEE: u64 = 1_000_000;

/// Default request timeout towards the public node
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Public node endpoints
pub const MAINNET_NODE_URL: &str = "https://nodes.lto.network";
pub const TESTNET_NODE_URL: &str = "https://testnet.lto.network";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid node url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Network the wallet operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    #[serde(alias = "main")]
    MainNet,
    #[serde(alias = "test")]
    TestNet,
}

impl NetworkType {
    /// Chain id byte embedded in addresses
    pub fn chain_id(&self) -> u8 {
        match self {
            NetworkType::MainNet => b'L',
            NetworkType::TestNet => b'T',
        }
    }

    pub fn default_node_url(&self) -> &'static str {
        match self {
            NetworkType::MainNet => MAINNET_NODE_URL,
            NetworkType::TestNet => TESTNET_NODE_URL,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            _ => Err(format!("Unknown network type: {}", s)),
        }
    }
}

/// Public node connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSection {
    /// Overrides the network's default node
    pub url: Option<String>,
    /// Sent as `X-API-Key` when present
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Script service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptsSection {
    pub install_fee: u64,
}

impl Default for ScriptsSection {
    fn default() -> Self {
        Self {
            install_fee: DEFAULT_SET_SCRIPT_FEE,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter level used when `RUST_LOG` is unset
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

/// Top-level wallet configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub network: NetworkType,
    pub node: NodeSection,
    pub scripts: ScriptsSection,
    pub logging: LoggingConfig,
}

impl WalletConfig {
    /// Default configuration for `network`
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective node URL: the configured override or the network default
    pub fn node_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .node
            .url
            .as_deref()
            .unwrap_or_else(|| self.network.default_node_url());

        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

impl FromStr for WalletConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
