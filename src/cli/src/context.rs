//! State shared by every command of one process.

use crate::errors::CliError;
use crate::opts::GlobalOpts;
use console::SignalSender;
use sdk::config::{default_config_path, ClientConfig};
use sdk::{NodeApi, RpcClient};
use std::io::ErrorKind;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a client from a loaded config.
pub type Connector = Arc<dyn Fn(ClientConfig) -> Arc<dyn NodeApi> + Send + Sync>;

/// Command execution state.
pub struct Context {
    globals: GlobalOpts,
    client: Option<Arc<dyn NodeApi>>,
    connector: Connector,
    signals: Option<SignalSender>,
    console: Option<NonZeroU64>,
}

impl Context {
    /// A context that talks JSON-RPC over HTTP.
    pub fn new(globals: GlobalOpts) -> Self {
        Self::with_connector(
            globals,
            Arc::new(|config: ClientConfig| {
                Arc::new(RpcClient::new(config)) as Arc<dyn NodeApi>
            }),
        )
    }

    pub fn with_connector(globals: GlobalOpts, connector: Connector) -> Self {
        Self {
            globals,
            client: None,
            connector,
            signals: None,
            console: None,
        }
    }

    pub fn globals(&self) -> &GlobalOpts {
        &self.globals
    }

    /// Nonce of the running console, if any.
    pub fn console(&self) -> Option<NonZeroU64> {
        self.console
    }

    /// Switches to console mode: background failures go to `signals`.
    pub fn enter_console(&mut self, nonce: NonZeroU64, signals: SignalSender) {
        self.console = Some(nonce);
        self.signals = Some(signals);
    }

    /// Applies global flags given on a console line. Flags that were not
    /// given keep their earlier value.
    pub fn merge_globals(&mut self, globals: GlobalOpts) {
        let mut changed = false;
        if let Some(path) = globals.path {
            changed |= self.globals.path.as_ref() != Some(&path);
            self.globals.path = Some(path);
        }
        if let Some(connect) = globals.rpc_connect {
            changed |= self.globals.rpc_connect.as_ref() != Some(&connect);
            self.globals.rpc_connect = Some(connect);
        }
        if let Some(port) = globals.rpc_port {
            changed |= self.globals.rpc_port != Some(port);
            self.globals.rpc_port = Some(port);
        }
        if changed {
            debug!("Connection settings changed, dropping client");
            self.client = None;
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.globals.path.clone().unwrap_or_else(default_config_path)
    }

    /// Loads the config file and applies global overrides.
    pub fn load_config(&self) -> Result<ClientConfig, CliError> {
        let path = self.config_path();
        let mut config = ClientConfig::from_file(&path).map_err(|source| {
            if let sdk::SdkError::Io(e) = &source {
                if e.kind() == ErrorKind::NotFound {
                    println!(
                        "\nYou can specify the configuration file path, use \"--path\" flag or make configuration, use \"config\" command"
                    );
                }
            }
            CliError::LoadConfig {
                path: path.clone(),
                source,
            }
        })?;

        if let Some(connect) = &self.globals.rpc_connect {
            config.rpc_connect = connect.clone();
        }
        if let Some(port) = self.globals.rpc_port {
            config.rpc_port = port;
        }
        Ok(config)
    }

    /// Returns the client, creating it on first use.
    pub fn client(&mut self) -> Result<Arc<dyn NodeApi>, CliError> {
        if let Some(client) = &self.client {
            return Ok(Arc::clone(client));
        }
        let config = self.load_config()?;
        debug!("Connecting to {}", config.endpoint());
        let client = (self.connector)(config);
        self.client = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Returns a logged-in client.
    pub async fn login(&mut self) -> Result<Arc<dyn NodeApi>, CliError> {
        let client = self.client()?;
        if !client.is_logged_in() {
            client.login().await.map_err(CliError::Login)?;
        }
        Ok(client)
    }

    /// The account from the config, used when a command names none.
    pub fn current_account(&mut self) -> Result<String, CliError> {
        let client = self.client()?;
        match client.config().account.as_deref().filter(|a| !a.is_empty()) {
            Some(account) => {
                info!("current account: {}", account);
                Ok(account.to_string())
            }
            None => Err(CliError::InvalidArgument {
                what: "account",
                reason: format!(
                    "current account not exist, Please set in the configuration file: {} or specify an account",
                    self.config_path().display()
                ),
            }),
        }
    }

    /// Forgets the client so the next command reloads config.
    pub fn reset_client(&mut self) {
        self.client = None;
    }

    /// Handles a failed command. In console mode, config and login failures
    /// are relayed as non-fatal signals; everything else is returned.
    pub fn report(&self, err: CliError) -> Result<(), CliError> {
        match &self.signals {
            Some(signals) if err.is_background() => {
                signals.send(&err, false);
                Ok(())
            }
            _ => Err(err),
        }
    }
}
