//! An in-memory node for driving commands without a network.

use async_trait::async_trait;
use cli::{Connector, Context, GlobalOpts};
use sdk::{ClientConfig, NodeApi, SdkError};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A node that records every call and answers with a fixed result.
pub struct MockNode {
    config: ClientConfig,
    logged_in: AtomicBool,
    fail_login: bool,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

#[async_trait]
impl NodeApi for MockNode {
    async fn call(&self, method: &str, params: Value) -> Result<Value, SdkError> {
        self.calls.lock().unwrap().push((method.to_string(), params));
        Ok(json!({ "method": method }))
    }

    async fn login(&self) -> Result<(), SdkError> {
        if self.fail_login {
            return Err(SdkError::Unauthorized("bad key".to_string()));
        }
        self.logged_in.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Everything the mock connector observed.
#[derive(Clone, Default)]
pub struct Recorded {
    /// Node calls in order
    pub calls: Arc<Mutex<Vec<(String, Value)>>>,
    /// Configs clients were created from
    pub connects: Arc<Mutex<Vec<ClientConfig>>>,
}

impl Recorded {
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ports(&self) -> Vec<u16> {
        self.connects.lock().unwrap().iter().map(|c| c.rpc_port).collect()
    }
}

/// A connector producing [`MockNode`]s that report into `recorded`.
pub fn connector(recorded: &Recorded, fail_login: bool) -> Connector {
    let recorded = recorded.clone();
    Arc::new(move |config: ClientConfig| {
        recorded.connects.lock().unwrap().push(config.clone());
        Arc::new(MockNode {
            config,
            logged_in: AtomicBool::new(false),
            fail_login,
            calls: Arc::clone(&recorded.calls),
        }) as Arc<dyn NodeApi>
    })
}

/// Writes a default config with its data directory under `dir` and returns
/// its path. No account is set.
pub fn write_config(dir: &Path) -> std::path::PathBuf {
    write_config_with_account(dir, None)
}

/// Like [`write_config`], with `account` as the current account.
pub fn write_config_with_account(dir: &Path, account: Option<&str>) -> std::path::PathBuf {
    let path = dir.join("config.json");
    let config = ClientConfig {
        data_dir: dir.to_path_buf(),
        key_id: Some("1234".to_string()),
        account: account.map(str::to_string),
        ..ClientConfig::default()
    };
    config.to_file(&path).unwrap();
    path
}

/// A context reading `config_path` and connecting to mock nodes.
pub fn context(config_path: &Path, recorded: &Recorded, fail_login: bool) -> Context {
    let globals = GlobalOpts {
        path: Some(config_path.to_path_buf()),
        ..GlobalOpts::default()
    };
    Context::with_connector(globals, connector(recorded, fail_login))
}

/// Splits a console line the way the console does.
pub fn args(line: &str) -> Vec<String> {
    console::split_line(line).unwrap()
}
