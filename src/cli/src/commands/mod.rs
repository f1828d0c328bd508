//! Commands of the RPC client.

pub mod auth;
pub mod completion;
pub mod config;
pub mod contract;
pub mod ecosystem;
pub mod query;
pub mod table;

use crate::context::Context;
use crate::errors::CliError;
use crate::opts::Command;
use crate::output::print_result;
use serde_json::Value;
use tracing::{debug, info};

/// One JSON-RPC call a command maps to.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    /// Method name without namespace
    pub method: &'static str,
    /// Positional parameters
    pub params: Vec<Value>,
    /// Whether the call needs an authorization token
    pub login: bool,
}

impl RpcRequest {
    pub fn new(method: &'static str, params: Vec<Value>) -> Self {
        Self {
            method,
            params,
            login: false,
        }
    }

    pub fn with_login(mut self) -> Self {
        self.login = true;
        self
    }
}

/// Client version with build information.
pub fn version() -> String {
    let info = match option_env!("BUILD_BRANCH") {
        Some(branch) => format!(
            "branch.{} commit.{} time.{}",
            branch,
            option_env!("BUILD_COMMIT").unwrap_or("unknown"),
            option_env!("BUILD_DATE").unwrap_or("unknown"),
        ),
        None => "branch.unknown commit.unknown time.unknown".to_string(),
    };
    format!("{} {}", env!("CARGO_PKG_VERSION"), info)
}

/// Parses a JSON argument. One pair of surrounding single quotes is
/// stripped if the raw text is not valid JSON, so `'{"a": 1}'` typed in the
/// console works like it does in a shell.
pub fn parse_json_arg(raw: &str) -> Result<Value, String> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            let inner = raw
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
                .ok_or_else(|| e.to_string())?;
            serde_json::from_str(inner).map_err(|e| e.to_string())
        }
    }
}

impl Command {
    /// The RPC call for commands that are a single node request.
    pub fn rpc_request(&self) -> Result<Option<RpcRequest>, CliError> {
        let request = match self {
            Command::Version
            | Command::Config(_)
            | Command::Console
            | Command::Completion(_)
            | Command::Refresh => return Ok(None),
            Command::GetAuthStatus => RpcRequest::new("getAuthStatus", Vec::new()),
            Command::GetKeyInfo(args) => args.request("getKeyInfo"),
            Command::GetBalance(args) => args.request(),
            Command::GetVersion => RpcRequest::new("getVersion", Vec::new()),
            Command::GetConfig(args) => args.request(),
            Command::EcosystemCount => RpcRequest::new("ecosystemCount", Vec::new()),
            Command::MaxBlock => RpcRequest::new("maxBlock", Vec::new()),
            Command::TransactionCount => RpcRequest::new("transactionCount", Vec::new()),
            Command::KeysCount => RpcRequest::new("keysCount", Vec::new()),
            Command::HonorNodesCount => RpcRequest::new("honorNodesCount", Vec::new()),
            Command::DetailedBlocks(args) => args.request("detailedBlocks"),
            Command::GetBlockInfo(args) => args.request(),
            Command::BlocksTxInfo(args) => args.request("blocksTxInfo"),
            Command::DetailedBlock(args) => args.request("detailedBlock"),
            Command::BlockTxCount(args) => args.request("blockTxCount"),
            Command::EcosystemInfo(args) => args.request(),
            Command::GetMemberInfo(args) => args.request(),
            Command::GetTableCount(args) => args.request("getTableCount"),
            Command::GetTable(args) => args.request("getTable"),
            Command::GetRow(args) => args.request(),
            Command::GetList(args) => args.request()?,
            Command::GetHistory(args) => args.request(),
            Command::GetContracts(args) => args.request("getContracts"),
            Command::GetContractInfo(args) => args.request("getContractInfo"),
            Command::GetSections(args) => args.request(),
            Command::GetPageRow(args) => args.request("getPageRow"),
            Command::GetMenuRow(args) => args.request("getMenuRow"),
            Command::GetSnippetRow(args) => args.request("getSnippetRow"),
            Command::GetAppContent(args) => args.request(),
            Command::AppParams(args) => args.request(),
            Command::EcosystemParams(args) => args.request(),
            Command::SystemParams(args) => args.request(),
            Command::CallContract(args) => args.request()?,
            Command::CallUtxo(args) => args.request()?,
        };
        Ok(Some(request))
    }
}

/// Runs one command. In console mode, config and login failures are relayed
/// to the error signal queue instead of being returned.
pub async fn execute(cmd: Command, ctx: &mut Context) -> Result<(), CliError> {
    match run(cmd, ctx).await {
        Err(e) => ctx.report(e),
        Ok(()) => Ok(()),
    }
}

async fn run(cmd: Command, ctx: &mut Context) -> Result<(), CliError> {
    match &cmd {
        Command::Version => {
            println!("{}", version());
            return Ok(());
        }
        Command::Config(args) => return config::run(args, ctx),
        Command::Console => {
            return match ctx.console() {
                Some(_) => {
                    info!("Console is running");
                    Ok(())
                }
                None => Err(CliError::Unsupported(
                    "the console can only be started from the command line".to_string(),
                )),
            };
        }
        Command::Completion(args) => return completion::run(args),
        Command::Refresh => return auth::refresh(ctx).await,
        _ => {}
    }

    let cmd = match cmd {
        Command::GetBalance(mut args) if args.account.is_none() => {
            args.account = Some(ctx.current_account()?);
            Command::GetBalance(args)
        }
        other => other,
    };

    let Some(request) = cmd.rpc_request()? else {
        return Ok(());
    };
    debug!("{} -> {:?}", cmd.name(), request);

    let client = if request.login {
        ctx.login().await?
    } else {
        ctx.client()?
    };
    let result = client
        .call(request.method, Value::Array(request.params))
        .await
        .map_err(|source| CliError::Request {
            command: cmd.name(),
            source,
        })?;
    print_result(cmd.name(), &result)
}
