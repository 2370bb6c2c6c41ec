//! # LTO Wallet: account script management
//!
//! Wallet-side service for reading and changing the script attached to an
//! LTO Network account.
//!
//! - [`lto_core`] - Addresses, script info, set-script payloads, collaborator traits
//! - [`lto_config`] - Network, node and logging configuration
//! - [`lto_rpc_client`] - REST client for public nodes
//! - [`lto_wallets`] - Session state (active account and signing credentials)
//! - [`lto_scripts`] - Template catalog and the script service
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lto_wallet::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = WalletConfig::default();
//!     lto_wallet::init_tracing(&config.logging)?;
//!
//!     let session = Arc::new(Session::new());
//!     let scripts = lto_wallet::connect(&config, session.clone())?;
//!
//!     for template in scripts.templates() {
//!         println!("{}", template.label);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use lto_config as config;
pub use lto_core as core;
pub use lto_rpc_client as rpc_client;
pub use lto_scripts as scripts;
pub use lto_wallets as wallets;

mod logging;

pub use logging::init_tracing;

use anyhow::Context;
use lto_config::WalletConfig;
use lto_core::AuthProvider;
use lto_rpc_client::PublicNode;
use lto_scripts::ScriptsService;
use std::sync::Arc;
use tracing::info;

/// Common imports for wallet integrations
pub mod prelude {
    pub use crate::config::{NetworkType, WalletConfig};
    pub use crate::core::{Account, Address, AuthProvider, SigningCredentials};
    pub use crate::scripts::{ScriptError, ScriptTemplate, ScriptsService};
    pub use crate::wallets::Session;
}

/// Builds a script service talking to the configured public node.
///
/// Must be called from within a Tokio runtime.
pub fn connect(
    config: &WalletConfig,
    auth: Arc<dyn AuthProvider>,
) -> anyhow::Result<ScriptsService> {
    let node = Arc::new(PublicNode::from_config(config).context("failed to create node client")?);
    info!(
        target: "lto",
        network = %config.network,
        node = %node.base_address(),
        "script service connected"
    );

    Ok(ScriptsService::new(auth, node.clone(), node)
        .with_network(config.network)
        .with_install_fee(config.scripts.install_fee))
}
