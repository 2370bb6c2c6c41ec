use crate::{Error, Result};
use lto_core::{Account, AuthProvider, SigningCredentials};
use tokio::sync::watch;
use tracing::info;

/// The wallet's authentication state.
///
/// A locked session keeps its account visible but hands out no credentials.
#[derive(Debug)]
pub struct Session {
    account: watch::Sender<Option<Account>>,
    credentials: watch::Sender<Option<SigningCredentials>>,
}

impl Session {
    pub fn new() -> Self {
        let (account, _) = watch::channel(None);
        let (credentials, _) = watch::channel(None);
        Self {
            account,
            credentials,
        }
    }

    /// Signs in, replacing any previous account.
    pub fn login(&self, account: Account, credentials: SigningCredentials) -> Result<()> {
        Self::check_credentials(&account, &credentials)?;
        info!(target: "lto", address = %account.address, "account signed in");

        // Credentials first so no observer pairs the new account with old keys.
        self.credentials.send_replace(Some(credentials));
        self.account.send_replace(Some(account));
        Ok(())
    }

    /// Switches to another account; same as a fresh login.
    pub fn switch_account(&self, account: Account, credentials: SigningCredentials) -> Result<()> {
        self.login(account, credentials)
    }

    /// Restores credentials for the current account.
    pub fn unlock(&self, credentials: SigningCredentials) -> Result<()> {
        let account = self.current_account().ok_or(Error::NotSignedIn)?;
        Self::check_credentials(&account, &credentials)?;
        self.credentials.send_replace(Some(credentials));
        Ok(())
    }

    /// Drops signing credentials but keeps the account.
    pub fn lock(&self) {
        info!(target: "lto", "session locked");
        self.credentials.send_replace(None);
    }

    pub fn logout(&self) {
        info!(target: "lto", "account signed out");
        self.credentials.send_replace(None);
        self.account.send_replace(None);
    }

    pub fn current_account(&self) -> Option<Account> {
        self.account.borrow().clone()
    }

    pub fn is_unlocked(&self) -> bool {
        self.credentials.borrow().is_some()
    }

    fn check_credentials(account: &Account, credentials: &SigningCredentials) -> Result<()> {
        if credentials.address() != &account.address {
            return Err(Error::CredentialsMismatch {
                account: account.address.clone(),
                credentials: credentials.address().clone(),
            });
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for Session {
    fn account(&self) -> watch::Receiver<Option<Account>> {
        self.account.subscribe()
    }

    fn credentials(&self) -> watch::Receiver<Option<SigningCredentials>> {
        self.credentials.subscribe()
    }
}
