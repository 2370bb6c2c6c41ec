//! Public node REST client tests against a mock HTTP server.

use async_trait::async_trait;
use lto_core::{
    Address, Broadcaster, NodeClient, NodeError, NodeResult, SetScriptPayload,
    SigningCredentials, TransactionSigner, TransactionType, UnsignedTransaction,
};
use lto_rpc_client::PublicNode;
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use url::Url;

const ADDRESS: &str = "3JbJZmzoPn1i2uNujKthwLys8xATTPqitPr";
const PUBLIC_KEY: &str = "US517G5965aydkZ46HS38QLi7UQiSojurfbQfKCELFx";

struct FixedSigner;

#[async_trait]
impl TransactionSigner for FixedSigner {
    async fn sign(&self, transaction: &UnsignedTransaction) -> NodeResult<Vec<String>> {
        assert_eq!(transaction.tx_type, 13);
        Ok(vec!["fixed-proof".to_string()])
    }
}

struct FailingSigner;

#[async_trait]
impl TransactionSigner for FailingSigner {
    async fn sign(&self, _transaction: &UnsignedTransaction) -> NodeResult<Vec<String>> {
        Err(NodeError::Signing("wallet locked".to_string()))
    }
}

fn address() -> Address {
    Address::parse(ADDRESS).unwrap()
}

fn credentials(signer: Arc<dyn TransactionSigner>) -> SigningCredentials {
    SigningCredentials::new(address(), PUBLIC_KEY, signer)
}

fn client(server: &mockito::ServerGuard) -> PublicNode {
    PublicNode::new(Url::parse(&server.url()).unwrap())
}

#[tokio::test]
async fn test_get_script_with_installed_script() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/addresses/scriptInfo/{}", ADDRESS).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "address": ADDRESS,
                "script": "base64:AQa3b8tH",
                "complexity": 1,
                "extraFee": 400000
            })
            .to_string(),
        )
        .create_async()
        .await;

    let info = client(&server).get_script(&address()).await.unwrap();

    assert!(info.has_script());
    assert_eq!(info.address, address());
    assert_eq!(info.extra_fee, 400_000);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_script_without_script() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/addresses/scriptInfo/{}", ADDRESS).as_str())
        .with_status(200)
        .with_body(json!({ "address": ADDRESS, "complexity": 0, "extraFee": 0 }).to_string())
        .create_async()
        .await;

    let info = client(&server).get_script(&address()).await.unwrap();

    assert!(!info.has_script());
}

#[tokio::test]
async fn test_get_script_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/addresses/scriptInfo/{}", ADDRESS).as_str())
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = client(&server).get_script(&address()).await.unwrap_err();

    assert!(matches!(err, NodeError::Decode(_)));
}

#[tokio::test]
async fn test_compile_script_posts_plain_source() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/utils/script/compile")
        .match_header("content-type", "text/plain")
        .match_body("let x = true\nx")
        .with_status(200)
        .with_body(
            json!({ "script": "base64abc", "complexity": 3, "extraFee": 400000 }).to_string(),
        )
        .create_async()
        .await;

    let compiled = client(&server).compile_script("let x = true\nx").await.unwrap();

    assert_eq!(compiled.script, "base64abc");
    assert_eq!(compiled.complexity, 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_compile_script_syntax_error_carries_diagnostic() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/utils/script/compile")
        .with_status(400)
        .with_body(json!({ "error": 305, "message": "Parse error at 1:5" }).to_string())
        .create_async()
        .await;

    let err = client(&server).compile_script("let = ").await.unwrap_err();

    assert_eq!(
        err,
        NodeError::Rejected {
            code: 305,
            message: "Parse error at 1:5".to_string()
        }
    );
    assert_eq!(err.diagnostic(), Some("Parse error at 1:5"));
}

#[tokio::test]
async fn test_non_json_error_body_uses_status_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/utils/script/compile")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = client(&server).compile_script("true").await.unwrap_err();

    assert_eq!(
        err,
        NodeError::Rejected {
            code: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_broadcast_set_script_sends_signed_transaction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/transactions/broadcast")
        .match_body(Matcher::PartialJson(json!({
            "type": 13,
            "version": 1,
            "sender": ADDRESS,
            "senderPublicKey": PUBLIC_KEY,
            "fee": 1000000,
            "script": "base64abc",
            "proofs": ["fixed-proof"]
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "8Sg5VZ2hZmW7oA9iJwxA9Q9GQhXzM6zjZ1fB1C3f6F1M",
                "type": 13,
                "sender": ADDRESS,
                "fee": 1000000,
                "timestamp": 1565992800000i64
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = client(&server)
        .broadcast(
            TransactionType::SetScript,
            &SetScriptPayload::install("base64abc", 1_000_000),
            &credentials(Arc::new(FixedSigner)),
        )
        .await
        .unwrap();

    assert_eq!(result.id, "8Sg5VZ2hZmW7oA9iJwxA9Q9GQhXzM6zjZ1fB1C3f6F1M");
    assert_eq!(result.sender, Some(address()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_broadcast_removal_sends_null_script() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/transactions/broadcast")
        .match_body(Matcher::PartialJson(json!({ "fee": 100000, "script": null })))
        .with_status(200)
        .with_body(json!({ "id": "tx-remove", "type": 13 }).to_string())
        .create_async()
        .await;

    let result = client(&server)
        .broadcast(
            TransactionType::SetScript,
            &SetScriptPayload::remove(100_000),
            &credentials(Arc::new(FixedSigner)),
        )
        .await
        .unwrap();

    assert_eq!(result.id, "tx-remove");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_broadcast_rejected_by_node() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/transactions/broadcast")
        .with_status(400)
        .with_body(
            json!({
                "error": 112,
                "message": "State check failed. Reason: negative balance"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client(&server)
        .broadcast(
            TransactionType::SetScript,
            &SetScriptPayload::remove(100_000),
            &credentials(Arc::new(FixedSigner)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, NodeError::Rejected { code: 112, .. }));
}

#[tokio::test]
async fn test_broadcast_signing_failure_skips_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/transactions/broadcast")
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .broadcast(
            TransactionType::SetScript,
            &SetScriptPayload::remove(100_000),
            &credentials(Arc::new(FailingSigner)),
        )
        .await
        .unwrap_err();

    assert_eq!(err, NodeError::Signing("wallet locked".to_string()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_broadcast_rejects_other_transaction_types() {
    let server = mockito::Server::new_async().await;

    let err = client(&server)
        .broadcast(
            TransactionType::Transfer,
            &SetScriptPayload::remove(100_000),
            &credentials(Arc::new(FixedSigner)),
        )
        .await
        .unwrap_err();

    assert_eq!(err, NodeError::Unsupported(TransactionType::Transfer));
}

#[tokio::test]
async fn test_from_config_sends_api_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/addresses/scriptInfo/{}", ADDRESS).as_str())
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_body(json!({ "address": ADDRESS }).to_string())
        .create_async()
        .await;

    let mut config = lto_config::WalletConfig::default();
    config.node.url = Some(server.url());
    config.node.api_key = Some("secret".to_string());

    let node = PublicNode::from_config(&config).unwrap();
    node.get_script(&address()).await.unwrap();

    mock.assert_async().await;
}
