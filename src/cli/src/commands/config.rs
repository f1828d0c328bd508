//! Initial config generation.

use crate::context::Context;
use crate::errors::CliError;
use sdk::config::{ClientConfig, DEFAULT_CONFIG_FILE, DEFAULT_DATA_DIR};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;

/// Arguments of `config`.
#[derive(Debug, StructOpt)]
pub struct ConfigArgs {
    /// Data directory (default cwd/data)
    #[structopt(long = "dataDir", parse(from_os_str))]
    pub data_dir: Option<PathBuf>,

    /// Keys directory (default dataDir)
    #[structopt(long = "keysDir", parse(from_os_str))]
    pub keys_dir: Option<PathBuf>,

    /// Console history directory (default dataDir)
    #[structopt(long = "historyDir", parse(from_os_str))]
    pub history_dir: Option<PathBuf>,

    /// Login ecosystem id
    #[structopt(long, default_value = "1")]
    pub ecosystem: i64,

    /// Send commands to the node running on <connect>
    #[structopt(long, default_value = "http://127.0.0.1")]
    pub connect: String,

    /// Connect to JSON-RPC on <port>
    #[structopt(long, default_value = "7079")]
    pub port: u16,

    /// Account key id used for login
    #[structopt(long = "keyId")]
    pub key_id: Option<String>,

    /// Current account address, the default of account arguments
    #[structopt(long)]
    pub account: Option<String>,
}

impl ConfigArgs {
    /// The config described by the flags.
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig {
            rpc_connect: self.connect.clone(),
            rpc_port: self.port,
            ecosystem: self.ecosystem,
            key_id: self.key_id.clone(),
            account: self.account.clone(),
            data_dir: self
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            keys_dir: self.keys_dir.clone(),
            history_dir: self.history_dir.clone(),
            ..ClientConfig::default()
        }
    }
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, ctx: &Context) -> Result<(), CliError> {
    if ctx.console().is_some() {
        info!("Please exit Console");
        return Ok(());
    }

    let config = args.to_config();
    let path = ctx
        .globals()
        .path
        .clone()
        .unwrap_or_else(|| config.data_dir.join(DEFAULT_CONFIG_FILE));

    config.to_file(&path)?;
    info!("Config is saved to {}", path.display());
    Ok(())
}
