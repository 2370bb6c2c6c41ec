use crate::TransactionType;
use thiserror::Error;

/// Result type for node operations
pub type NodeResult<T> = std::result::Result<T, NodeError>;

/// Failures reported by node and signing collaborators.
///
/// Messages are kept as text so the error can be cloned into every
/// subscriber of a shared state channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("node rejected request ({code}): {message}")]
    Rejected { code: i32, message: String },

    #[error("invalid node response: {0}")]
    Decode(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("unsupported transaction type: {0}")]
    Unsupported(TransactionType),
}

impl NodeError {
    /// Diagnostic text supplied by the node, if it produced one
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            NodeError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
