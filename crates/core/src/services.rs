//! Collaborator contracts consumed by wallet services.
//!
//! Consumers hold these as `Arc<dyn Trait>` so node access, broadcasting and
//! authentication can be swapped independently (and mocked in tests).

use crate::{
    Account, Address, BroadcastResult, CompiledScript, NodeResult, ScriptInfo, SetScriptPayload,
    SigningCredentials, TransactionType,
};
use async_trait::async_trait;
use tokio::sync::watch;

/// Observable authentication state.
///
/// Both channels always hold the latest value; `None` means signed out
/// (or locked, for credentials).
pub trait AuthProvider: Send + Sync {
    /// Current account, updated on login, switch and logout
    fn account(&self) -> watch::Receiver<Option<Account>>;

    /// Current signing credentials
    fn credentials(&self) -> watch::Receiver<Option<SigningCredentials>>;
}

/// Read and compile operations against a public node
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Script currently attached to `address`
    async fn get_script(&self, address: &Address) -> NodeResult<ScriptInfo>;

    /// Compiles script source; syntax errors come back as `NodeError::Rejected`
    async fn compile_script(&self, code: &str) -> NodeResult<CompiledScript>;
}

/// Signs and submits transactions
#[async_trait]
pub trait Broadcaster: Send + Sync {
    async fn broadcast(
        &self,
        tx_type: TransactionType,
        payload: &SetScriptPayload,
        credentials: &SigningCredentials,
    ) -> NodeResult<BroadcastResult>;
}
