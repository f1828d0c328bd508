//! Error types for the RPC client commands.

use sdk::SdkError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// The config file could not be loaded.
    #[error("loading config {}, err: {source}", path.display())]
    LoadConfig {
        /// The config file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: SdkError,
    },

    /// Login failed.
    #[error("[login] Authorization failed: {0}")]
    Login(#[source] SdkError),

    /// The node rejected a request or could not be reached.
    #[error("{command} Failed: {source}")]
    Request {
        /// The command that failed
        command: &'static str,
        /// The underlying error
        #[source]
        source: SdkError,
    },

    /// An argument could not be interpreted.
    #[error("Invalid {what}: {reason}")]
    InvalidArgument {
        /// Which argument
        what: &'static str,
        /// Why it is invalid
        reason: String,
    },

    /// Error from the SDK outside a request.
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// Error when a file operation fails.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a result cannot be printed.
    #[error("Result marshal failed: {0}")]
    Output(#[from] serde_json::Error),

    /// The command cannot run in the current mode.
    #[error("{0}")]
    Unsupported(String),
}

impl CliError {
    /// Failures that come from loading config or logging in. In console
    /// mode these are relayed through the error signal queue.
    pub fn is_background(&self) -> bool {
        matches!(self, CliError::LoadConfig { .. } | CliError::Login(_))
    }
}
