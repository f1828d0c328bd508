//! Error types for the client SDK.

use thiserror::Error;

/// Errors that can occur while talking to a node.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Error when a file operation fails.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization or deserialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the HTTP request fails.
    #[error("Network error: {0}")]
    Network(String),

    /// Error returned by the node in the JSON-RPC envelope.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code
        code: i64,
        /// The error message
        message: String,
    },

    /// Error when the node response is not a valid JSON-RPC response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Error when the client is not authorized.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(error: reqwest::Error) -> Self {
        SdkError::Network(error.to_string())
    }
}
