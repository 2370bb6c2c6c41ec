//! LTO Account Scripts
//!
//! Wallet-side management of the script attached to an account:
//! - a catalog of predefined script templates per network
//! - live script info and a derived "script enabled" flag that always
//!   follow the currently authenticated account
//! - installing a compiled script and removing the current one through
//!   set-script transactions

mod error;
mod service;
pub mod templates;

pub use error::ScriptError;
pub use service::{ScriptEnabledState, ScriptInfoState, ScriptsService};
pub use templates::ScriptTemplate;

pub use lto_config::DEFAULT_SET_SCRIPT_FEE;
