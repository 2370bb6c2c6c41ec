//! Signing capability handed out by the wallet.

use crate::{Address, NodeResult, UnsignedTransaction};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Produces proofs for a transaction on behalf of one account.
///
/// Key storage and the binary signing format live behind this trait.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Returns base58 encoded proofs for `transaction`
    async fn sign(&self, transaction: &UnsignedTransaction) -> NodeResult<Vec<String>>;
}

/// Credentials able to authorize transactions for `address`.
///
/// Services treat this as a black box and pass it through to the
/// broadcaster.
#[derive(Clone)]
pub struct SigningCredentials {
    address: Address,
    public_key: String,
    signer: Arc<dyn TransactionSigner>,
}

impl SigningCredentials {
    pub fn new(
        address: Address,
        public_key: impl Into<String>,
        signer: Arc<dyn TransactionSigner>,
    ) -> Self {
        Self {
            address,
            public_key: public_key.into(),
            signer,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub async fn sign(&self, transaction: &UnsignedTransaction) -> NodeResult<Vec<String>> {
        self.signer.sign(transaction).await
    }
}

impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
