use crate::templates::{self, ScriptTemplate};
use crate::ScriptError;
use lto_config::{NetworkType, DEFAULT_SET_SCRIPT_FEE};
use lto_core::{
    Account, AuthProvider, BroadcastResult, Broadcaster, NodeClient, ScriptInfo,
    SetScriptPayload, SigningCredentials, TransactionType,
};
use std::sync::Arc;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Script info for the active account; `None` while the lookup is pending
pub type ScriptInfoState = Option<Result<ScriptInfo, ScriptError>>;

/// Whether the active account has a script; `None` while pending
pub type ScriptEnabledState = Option<Result<bool, ScriptError>>;

/// Reads and changes the script attached to the signed-in account.
///
/// A background task follows the authentication provider's account channel
/// and republishes the matching script info. All subscribers share that one
/// lookup and late subscribers see the latest value. When the account
/// changes, an in-flight lookup for the previous account is dropped and the
/// state goes back to pending, so a stale account's script is never shown.
///
/// Mutating operations are independent of each other: concurrent calls are
/// neither serialized nor deduplicated.
pub struct ScriptsService {
    templates: &'static [ScriptTemplate],
    install_fee: u64,
    auth: Arc<dyn AuthProvider>,
    node: Arc<dyn NodeClient>,
    broadcaster: Arc<dyn Broadcaster>,
    script_info: watch::Receiver<ScriptInfoState>,
    script_enabled: watch::Receiver<ScriptEnabledState>,
    refresh: Arc<Notify>,
    tracker: JoinHandle<()>,
}

impl ScriptsService {
    /// Creates the service with the mainnet catalog and default install fee.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        node: Arc<dyn NodeClient>,
        broadcaster: Arc<dyn Broadcaster>,
    ) -> Self {
        let (info_tx, script_info) = watch::channel(None);
        let (enabled_tx, script_enabled) = watch::channel(None);
        let refresh = Arc::new(Notify::new());

        let tracker = tokio::spawn(track_script_info(
            auth.account(),
            node.clone(),
            info_tx,
            enabled_tx,
            refresh.clone(),
        ));

        Self {
            templates: templates::MAINNET_TEMPLATES,
            install_fee: DEFAULT_SET_SCRIPT_FEE,
            auth,
            node,
            broadcaster,
            script_info,
            script_enabled,
            refresh,
            tracker,
        }
    }

    /// Selects the template catalog for `network`
    pub fn with_network(mut self, network: NetworkType) -> Self {
        self.templates = templates::templates_for(network);
        self
    }

    /// Overrides the fee used by [`install_script`](Self::install_script)
    pub fn with_install_fee(mut self, fee: u64) -> Self {
        self.install_fee = fee;
        self
    }

    pub fn templates(&self) -> &'static [ScriptTemplate] {
        self.templates
    }

    pub fn install_fee(&self) -> u64 {
        self.install_fee
    }

    /// Subscribes to script info for the active account
    pub fn script_info(&self) -> watch::Receiver<ScriptInfoState> {
        self.script_info.clone()
    }

    /// Subscribes to the derived "script enabled" flag
    pub fn script_enabled(&self) -> watch::Receiver<ScriptEnabledState> {
        self.script_enabled.clone()
    }

    /// Current flag, reading pending and failed lookups as `false`
    pub fn is_script_enabled(&self) -> bool {
        matches!(*self.script_enabled.borrow(), Some(Ok(true)))
    }

    /// Fetches script info again for the current account.
    ///
    /// Useful once a set-script transaction has been mined.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Compiles `code` and broadcasts it as the account script.
    pub async fn install_script(&self, code: &str) -> Result<BroadcastResult, ScriptError> {
        let credentials = self.signing_credentials()?;

        let compiled = self.node.compile_script(code).await.map_err(|err| {
            warn!(target: "lto", error = %err, "script rejected by compiler");
            ScriptError::Compile(err)
        })?;
        debug!(target: "lto", complexity = compiled.complexity, "script compiled");

        let payload = SetScriptPayload::install(compiled.script, self.install_fee);
        self.broadcast(&payload, &credentials).await
    }

    /// Broadcasts a set-script transaction with an empty script.
    pub async fn remove_script(&self, fee: u64) -> Result<BroadcastResult, ScriptError> {
        let credentials = self.signing_credentials()?;
        self.broadcast(&SetScriptPayload::remove(fee), &credentials).await
    }

    fn signing_credentials(&self) -> Result<SigningCredentials, ScriptError> {
        let credentials = self.auth.credentials().borrow().clone();
        credentials.ok_or(ScriptError::NotAuthenticated)
    }

    async fn broadcast(
        &self,
        payload: &SetScriptPayload,
        credentials: &SigningCredentials,
    ) -> Result<BroadcastResult, ScriptError> {
        let result = self
            .broadcaster
            .broadcast(TransactionType::SetScript, payload, credentials)
            .await
            .map_err(|err| {
                warn!(target: "lto", error = %err, "set-script broadcast failed");
                ScriptError::Broadcast(err)
            })?;

        info!(
            target: "lto",
            id = %result.id,
            sender = %credentials.address(),
            fee = payload.fee,
            removal = payload.clears_script(),
            "set-script transaction accepted"
        );
        Ok(result)
    }
}

impl Drop for ScriptsService {
    fn drop(&mut self) {
        self.tracker.abort();
    }
}

/// Follows the account channel until it closes.
async fn track_script_info(
    mut accounts: watch::Receiver<Option<Account>>,
    node: Arc<dyn NodeClient>,
    info: watch::Sender<ScriptInfoState>,
    enabled: watch::Sender<ScriptEnabledState>,
    refresh: Arc<Notify>,
) {
    loop {
        let account = accounts.borrow_and_update().clone();

        match account {
            None => publish(&info, &enabled, Some(Err(ScriptError::NoAccount))),
            Some(account) => {
                publish(&info, &enabled, None);
                debug!(target: "lto", address = %account.address, "fetching script info");

                let fetched = tokio::select! {
                    result = node.get_script(&account.address) => Some(result),
                    changed = accounts.changed() => {
                        if changed.is_err() {
                            return;
                        }
                        None
                    }
                };

                match fetched {
                    Some(result) => {
                        publish(&info, &enabled, Some(result.map_err(ScriptError::Node)))
                    }
                    None => {
                        debug!(
                            target: "lto",
                            address = %account.address,
                            "account changed, dropping lookup"
                        );
                        continue;
                    }
                }
            }
        }

        tokio::select! {
            changed = accounts.changed() => {
                if changed.is_err() {
                    return;
                }
            }
            _ = refresh.notified() => {
                debug!(target: "lto", "script info refresh requested");
            }
        }
    }
}

fn publish(
    info: &watch::Sender<ScriptInfoState>,
    enabled: &watch::Sender<ScriptEnabledState>,
    state: ScriptInfoState,
) {
    let flag = state
        .as_ref()
        .map(|result| result.as_ref().map(ScriptInfo::has_script).map_err(Clone::clone));

    info.send_replace(state);
    enabled.send_if_modified(|current| {
        if *current == flag {
            return false;
        }
        *current = flag;
        true
    });
}
