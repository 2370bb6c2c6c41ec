use crate::models::NodeErrorBody;
use async_trait::async_trait;
use lto_config::WalletConfig;
use lto_core::{
    Address, Broadcaster, BroadcastResult, CompiledScript, NodeClient, NodeError, NodeResult,
    ScriptInfo, SetScriptPayload, SignedTransaction, SigningCredentials, TransactionType,
    UnsignedTransaction,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const API_KEY_HEADER: &str = "x-api-key";

/// Client for an LTO public node
#[derive(Debug, Clone)]
pub struct PublicNode {
    base_address: Url,
    http_client: Client,
}

impl PublicNode {
    /// Creates a client with default HTTP settings
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Creates a client around an existing HTTP client
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
        }
    }

    /// Creates a client from wallet configuration
    pub fn from_config(config: &WalletConfig) -> NodeResult<Self> {
        let url = config
            .node_url()
            .map_err(|e| NodeError::Transport(e.to_string()))?;

        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.node.timeout_secs));

        if let Some(key) = config.node.api_key.as_deref() {
            let value = HeaderValue::from_str(key)
                .map_err(|e| NodeError::Transport(format!("invalid api key: {}", e)))?;
            let mut headers = HeaderMap::new();
            headers.insert(API_KEY_HEADER, value);
            builder = builder.default_headers(headers);
        }

        let client = builder
            .build()
            .map_err(|e| NodeError::Transport(format!("HTTP client error: {}", e)))?;

        Ok(Self::with_client(client, url))
    }

    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    fn endpoint(&self, path: &str) -> NodeResult<Url> {
        let base = self.base_address.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path))
            .map_err(|e| NodeError::Transport(format!("invalid endpoint {}: {}", path, e)))
    }

    /// Decodes a successful body or maps the node's error body
    async fn read_json<T: DeserializeOwned>(response: Response) -> NodeResult<T> {
        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|e| NodeError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<NodeErrorBody>(&content) {
                Ok(body) => NodeError::Rejected {
                    code: body.error,
                    message: body.message,
                },
                Err(_) => NodeError::Rejected {
                    code: i32::from(status.as_u16()),
                    message: content,
                },
            });
        }

        serde_json::from_str(&content).map_err(|e| NodeError::Decode(e.to_string()))
    }

    fn transport(e: reqwest::Error) -> NodeError {
        NodeError::Transport(format!("HTTP error: {}", e))
    }
}

#[async_trait]
impl NodeClient for PublicNode {
    async fn get_script(&self, address: &Address) -> NodeResult<ScriptInfo> {
        let url = self.endpoint(&format!("addresses/scriptInfo/{}", address))?;
        debug!(target: "lto", %address, "fetching script info");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read_json(response).await
    }

    async fn compile_script(&self, code: &str) -> NodeResult<CompiledScript> {
        let url = self.endpoint("utils/script/compile")?;
        debug!(target: "lto", length = code.len(), "compiling script");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(code.to_string())
            .send()
            .await
            .map_err(Self::transport)?;

        let result = Self::read_json(response).await;
        if let Err(ref err) = result {
            warn!(target: "lto", error = %err, "script compilation failed");
        }
        result
    }
}

#[async_trait]
impl Broadcaster for PublicNode {
    async fn broadcast(
        &self,
        tx_type: TransactionType,
        payload: &SetScriptPayload,
        credentials: &SigningCredentials,
    ) -> NodeResult<BroadcastResult> {
        if tx_type != TransactionType::SetScript {
            return Err(NodeError::Unsupported(tx_type));
        }

        let timestamp = chrono::Utc::now().timestamp_millis();
        let transaction = UnsignedTransaction::set_script(payload, credentials, timestamp);
        let proofs = credentials.sign(&transaction).await?;
        let signed = SignedTransaction {
            transaction,
            proofs,
        };

        let url = self.endpoint("transactions/broadcast")?;
        debug!(
            target: "lto",
            %tx_type,
            sender = %credentials.address(),
            fee = payload.fee,
            "broadcasting transaction"
        );

        let response = self
            .http_client
            .post(url)
            .json(&signed)
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read_json(response).await
    }
}
