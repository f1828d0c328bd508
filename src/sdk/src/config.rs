//! Configuration for the RPC client.

use crate::errors::SdkError;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Default node address.
pub const DEFAULT_CONNECT: &str = "http://127.0.0.1";
/// Default JSON-RPC port.
pub const DEFAULT_PORT: u16 = 7079;
/// Default working directory.
pub const DEFAULT_DATA_DIR: &str = "data";
/// Name of the config file inside the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Configuration for the RPC client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// The node to connect to
    pub rpc_connect: String,
    /// The JSON-RPC port of the node
    pub rpc_port: u16,
    /// The ecosystem to log in to
    pub ecosystem: i64,
    /// The account key id used for login
    pub key_id: Option<String>,
    /// The current account address, "xxxx-xxxx-xxxx-xxxx-xxxx"
    pub account: Option<String>,
    /// A pre-issued authorization token
    pub token: Option<String>,
    /// Prefix of the authorization header value
    pub jwt_prefix: String,
    /// Application working directory
    pub data_dir: PathBuf,
    /// Directory for key files (defaults to `data_dir`)
    pub keys_dir: Option<PathBuf>,
    /// Directory for the console history (defaults to `data_dir`)
    #[serde(alias = "liner_path")]
    pub history_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_connect: DEFAULT_CONNECT.to_string(),
            rpc_port: DEFAULT_PORT,
            ecosystem: 1,
            key_id: None,
            account: None,
            token: None,
            jwt_prefix: "Bearer ".to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            keys_dir: None,
            history_dir: None,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a file, expanding `$VAR` and `${VAR}`
    /// references from the environment first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SdkError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&expand_env(&contents))?;
        Ok(config)
    }

    /// Saves configuration to a file, creating the parent directory.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SdkError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// The JSON-RPC endpoint, `<rpc_connect>:<rpc_port>`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.rpc_connect.trim_end_matches('/'), self.rpc_port)
    }

    pub fn keys_dir(&self) -> &Path {
        self.keys_dir.as_deref().unwrap_or(&self.data_dir)
    }

    pub fn history_dir(&self) -> &Path {
        self.history_dir.as_deref().unwrap_or(&self.data_dir)
    }
}

/// Default config file path, `data/config.json`.
pub fn default_config_path() -> PathBuf {
    Path::new(DEFAULT_DATA_DIR).join(DEFAULT_CONFIG_FILE)
}

/// Replaces `$VAR` and `${VAR}` with environment values. Unset variables
/// become empty.
pub fn expand_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let mut name = String::new();
        if chars.peek() == Some(&'{') {
            chars.next();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                out.push_str("${");
                out.push_str(&name);
                continue;
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    name.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            if name.is_empty() {
                out.push('$');
                continue;
            }
        }
        out.push_str(&std::env::var(&name).unwrap_or_default());
    }
    out
}
