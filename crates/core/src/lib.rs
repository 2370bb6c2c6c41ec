//! LTO Core Library
//!
//! Shared types for wallet-side account script management:
//! - Addresses and authenticated accounts
//! - Script metadata reported by a public node
//! - Set-script transaction payloads and broadcast results
//! - Signing credentials handed out by the wallet
//! - Collaborator traits used to compose services

pub mod account;
pub mod address;
pub mod credentials;
pub mod error;
pub mod script_info;
pub mod services;
pub mod transaction;

pub use account::Account;
pub use address::{Address, AddressError};
pub use credentials::{SigningCredentials, TransactionSigner};
pub use error::{NodeError, NodeResult};
pub use script_info::{CompiledScript, ScriptInfo};
pub use services::{AuthProvider, Broadcaster, NodeClient};
pub use transaction::{
    BroadcastResult, SetScriptPayload, SignedTransaction, TransactionType, UnsignedTransaction,
};
