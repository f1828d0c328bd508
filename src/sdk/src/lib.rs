//! JSON-RPC client SDK for IBAX nodes.

pub mod client;
pub mod config;
pub mod errors;

// Re-export commonly used types and functions
pub use client::{NodeApi, RpcClient};
pub use config::ClientConfig;
pub use errors::SdkError;
