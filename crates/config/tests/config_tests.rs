//! Configuration file loading tests

use lto_config::{ConfigError, NetworkType, WalletConfig, DEFAULT_SET_SCRIPT_FEE};
use std::io::Write;

#[test]
fn test_load_full_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
network = "testnet"

[node]
url = "http://127.0.0.1:6869"
api_key = "secret"
timeout_secs = 5

[scripts]
install_fee = 2000000

[logging]
level = "debug"
ansi = false
"#
    )
    .unwrap();

    let config = WalletConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.network, NetworkType::TestNet);
    assert_eq!(config.node.api_key.as_deref(), Some("secret"));
    assert_eq!(config.node.timeout_secs, 5);
    assert_eq!(config.scripts.install_fee, 2_000_000);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.ansi);
    assert_eq!(config.node_url().unwrap().port(), Some(6869));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: WalletConfig = "[node]\napi_key = \"k\"\n".parse().unwrap();

    assert_eq!(config.network, NetworkType::MainNet);
    assert_eq!(config.scripts.install_fee, DEFAULT_SET_SCRIPT_FEE);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.toml");

    let mut config = WalletConfig::for_network(NetworkType::TestNet);
    config.scripts.install_fee = 1_500_000;
    config.save_to_file(&path).unwrap();

    assert_eq!(WalletConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_missing_file_and_bad_toml() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        WalletConfig::load_from_file(dir.path().join("missing.toml")),
        Err(ConfigError::Io(_))
    ));

    assert!(matches!(
        "network = \"devnet\"".parse::<WalletConfig>(),
        Err(ConfigError::Parse(_))
    ));
}
