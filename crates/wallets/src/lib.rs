//! LTO Wallets Library
//!
//! Session state for the wallet: which account is active and whether it can
//! currently sign. Both are published as watch channels so services can
//! react to logins, account switches, locks and logouts.

mod session;

pub use session::Session;

use lto_core::Address;
use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("credentials for {credentials} cannot sign for account {account}")]
    CredentialsMismatch {
        account: Address,
        credentials: Address,
    },

    #[error("no account is signed in")]
    NotSignedIn,
}
