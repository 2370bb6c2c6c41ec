use lto_core::NodeError;
use thiserror::Error;

/// Errors surfaced by the script service.
///
/// Nothing is retried; every failure reaches the caller or subscriber as is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("no account is signed in")]
    NoAccount,

    #[error("no signing credentials available")]
    NotAuthenticated,

    #[error("script compilation failed: {0}")]
    Compile(NodeError),

    #[error("set-script broadcast failed: {0}")]
    Broadcast(NodeError),

    #[error("failed to fetch script info: {0}")]
    Node(NodeError),
}
