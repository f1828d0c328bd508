//! JSON-RPC client for IBAX nodes.

use crate::config::ClientConfig;
use crate::errors::SdkError;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Namespace prefixed to every RPC method.
pub const NAMESPACE: &str = "ibax";

/// Operations the command line needs from a node.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Calls `<namespace>.<method>` with positional `params` and returns the
    /// `result` member of the response.
    async fn call(&self, method: &str, params: Value) -> Result<Value, SdkError>;

    /// Obtains an authorization token for subsequent calls.
    async fn login(&self) -> Result<(), SdkError>;

    /// Whether a token is held.
    fn is_logged_in(&self) -> bool;

    /// The configuration the client was built from.
    fn config(&self) -> &ClientConfig;
}

/// A [`NodeApi`] over HTTP JSON-RPC 2.0.
pub struct RpcClient {
    http: reqwest::Client,
    config: ClientConfig,
    endpoint: String,
    next_id: AtomicU64,
    token: RwLock<Option<String>>,
}

impl RpcClient {
    pub fn new(config: ClientConfig) -> Self {
        let endpoint = config.endpoint();
        let token = config.token.clone().filter(|t| !t.is_empty());
        Self {
            http: reqwest::Client::new(),
            config,
            endpoint,
            next_id: AtomicU64::new(1),
            token: RwLock::new(token),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_token(&self, token: String) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }
}

#[async_trait]
impl NodeApi for RpcClient {
    async fn call(&self, method: &str, params: Value) -> Result<Value, SdkError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = build_request(id, method, params);
        debug!("RPC request to {}: {}", self.endpoint, request);

        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(token) = self.token() {
            builder = builder.header(AUTHORIZATION, format!("{}{}", self.config.jwt_prefix, token));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SdkError::Network(format!("Failed to connect to node: {}", e)))?;
        let response_text = response
            .text()
            .await
            .map_err(|e| SdkError::Network(format!("Failed to get response text: {}", e)))?;
        debug!("RPC response: {}", response_text);

        parse_response(&response_text)
    }

    async fn login(&self) -> Result<(), SdkError> {
        if self.is_logged_in() {
            return Ok(());
        }
        let key_id = self
            .config
            .key_id
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SdkError::Unauthorized("key id can't be empty, please set it in the configuration file".to_string())
            })?;

        let result = self
            .call(
                "login",
                json!([{ "key_id": key_id, "ecosystem_id": self.config.ecosystem }]),
            )
            .await?;
        let token = result
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SdkError::Unauthorized(format!("No token in login result: {}", result)))?;

        self.set_token(token.to_string());
        info!("Logged in to ecosystem {}", self.config.ecosystem);
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Builds a JSON-RPC 2.0 request envelope.
pub fn build_request(id: u64, method: &str, params: Value) -> Value {
    let params = match params {
        Value::Null => json!([]),
        Value::Array(_) => params,
        other => json!([other]),
    };
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": format!("{}.{}", NAMESPACE, method),
        "params": params,
    })
}

/// Extracts the result from a JSON-RPC response body.
pub fn parse_response(response_text: &str) -> Result<Value, SdkError> {
    if response_text.is_empty() {
        return Err(SdkError::InvalidResponse("Empty response from node".to_string()));
    }
    let mut response: Value = serde_json::from_str(response_text)
        .map_err(|e| SdkError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    if let Some(error) = response.get("error") {
        if !error.is_null() {
            return Err(SdkError::Rpc {
                code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string()),
            });
        }
    }

    match response.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(SdkError::InvalidResponse(format!("No result in response: {}", response_text))),
    }
}
