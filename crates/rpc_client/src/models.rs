//! Wire models specific to the node REST API.

use serde::Deserialize;

/// Error body returned by the node for rejected requests
#[derive(Debug, Clone, Deserialize)]
pub struct NodeErrorBody {
    pub error: i32,
    pub message: String,
}
