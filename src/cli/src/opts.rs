//! Command tree of the RPC client.

use crate::commands::{completion, config, contract, ecosystem, query, table};
use std::path::PathBuf;
use structopt::StructOpt;

/// Program name used when parsing console lines.
pub const BIN_NAME: &str = "ibax-cli";

/// Command line arguments for the RPC client.
#[derive(Debug, StructOpt)]
#[structopt(name = "ibax-cli", about = "IBAX Core RPC Client")]
pub struct Cli {
    #[structopt(flatten)]
    pub global: GlobalOpts,

    /// Subcommand to run
    #[structopt(subcommand)]
    pub cmd: Command,
}

/// Flags that stay in effect for a whole console session.
#[derive(Debug, Clone, Default, PartialEq, Eq, StructOpt)]
pub struct GlobalOpts {
    /// Path to the configuration file (default data/config.json)
    #[structopt(long = "path", parse(from_os_str))]
    pub path: Option<PathBuf>,

    /// Send commands to the node running on <connect>
    #[structopt(long = "rpcConnect")]
    pub rpc_connect: Option<String>,

    /// Connect to JSON-RPC on <port>
    #[structopt(long = "rpcPort")]
    pub rpc_port: Option<u16>,
}

/// Subcommands of the RPC client.
#[derive(Debug, StructOpt)]
pub enum Command {
    /// Show version
    #[structopt(name = "version")]
    Version,

    /// Initial config generation
    #[structopt(name = "config")]
    Config(config::ConfigArgs),

    /// IBAX console, command completion
    #[structopt(name = "console")]
    Console,

    /// Generate a shell completion script
    #[structopt(name = "completion")]
    Completion(completion::CompletionArgs),

    /// Get authorization status
    #[structopt(name = "getAuthStatus")]
    GetAuthStatus,

    /// Refresh config and log in again
    #[structopt(name = "refresh")]
    Refresh,

    /// Returns the ecosystems and roles registered with an account
    #[structopt(name = "getKeyInfo")]
    GetKeyInfo(query::AccountArgs),

    /// Get account balance
    #[structopt(name = "getBalance")]
    GetBalance(query::BalanceArgs),

    /// Get node version information
    #[structopt(name = "getVersion")]
    GetVersion,

    /// Get chain config
    #[structopt(name = "getConfig")]
    GetConfig(query::OptionArgs),

    /// Get ecosystem count
    #[structopt(name = "ecosystemCount")]
    EcosystemCount,

    /// Get max block id
    #[structopt(name = "maxBlock")]
    MaxBlock,

    /// Get transaction count
    #[structopt(name = "transactionCount")]
    TransactionCount,

    /// Get account key count
    #[structopt(name = "keysCount")]
    KeysCount,

    /// Get honor nodes count
    #[structopt(name = "honorNodesCount")]
    HonorNodesCount,

    /// Get detailed information of a range of blocks
    #[structopt(name = "detailedBlocks")]
    DetailedBlocks(query::BlockRangeArgs),

    /// Get block information
    #[structopt(name = "getBlockInfo")]
    GetBlockInfo(query::BlockIdArgs),

    /// Get transactions of a range of blocks
    #[structopt(name = "blocksTxInfo")]
    BlocksTxInfo(query::BlockRangeArgs),

    /// Get detailed block information by id or hash
    #[structopt(name = "detailedBlock")]
    DetailedBlock(query::BlockOrHashArgs),

    /// Get the transaction count of a block by id or hash
    #[structopt(name = "blockTxCount")]
    BlockTxCount(query::BlockOrHashArgs),

    /// Get ecosystem information
    #[structopt(name = "ecosystemInfo")]
    EcosystemInfo(query::EcosystemArgs),

    /// Get member information
    #[structopt(name = "getMemberInfo")]
    GetMemberInfo(query::MemberArgs),

    /// Get the tables of the current ecosystem
    #[structopt(name = "getTableCount")]
    GetTableCount(table::PageArgs),

    /// Get table information
    #[structopt(name = "getTable")]
    GetTable(table::NameArgs),

    /// Get a row of a table
    #[structopt(name = "getRow")]
    GetRow(table::GetRowArgs),

    /// Get the entries of a table
    #[structopt(name = "getList")]
    GetList(table::GetListArgs),

    /// Get the change history of a row
    #[structopt(name = "getHistory")]
    GetHistory(table::HistoryArgs),

    /// Get the contracts of the current ecosystem
    #[structopt(name = "getContracts")]
    GetContracts(table::PageArgs),

    /// Get contract information
    #[structopt(name = "getContractInfo")]
    GetContractInfo(table::NameArgs),

    /// Get the menu sections of the current ecosystem
    #[structopt(name = "getSections")]
    GetSections(ecosystem::SectionsArgs),

    /// Get a row of the pages table
    #[structopt(name = "getPageRow")]
    GetPageRow(table::NameArgs),

    /// Get a row of the menu table
    #[structopt(name = "getMenuRow")]
    GetMenuRow(table::NameArgs),

    /// Get a row of the snippets table
    #[structopt(name = "getSnippetRow")]
    GetSnippetRow(table::NameArgs),

    /// Get the pages, snippets and menus of an application
    #[structopt(name = "getAppContent")]
    GetAppContent(ecosystem::AppIdArgs),

    /// Get application parameters
    #[structopt(name = "appParams")]
    AppParams(ecosystem::AppParamsArgs),

    /// Get ecosystem parameters
    #[structopt(name = "ecosystemParams")]
    EcosystemParams(ecosystem::EcosystemParamsArgs),

    /// Get platform parameters
    #[structopt(name = "systemParams")]
    SystemParams(ecosystem::SystemParamsArgs),

    /// Call a contract
    #[structopt(name = "callContract")]
    CallContract(contract::CallContractArgs),

    /// Call UTXO
    #[structopt(name = "callUtxo")]
    CallUtxo(contract::CallUtxoArgs),
}

impl Command {
    /// The name the command is invoked by.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Version => "version",
            Command::Config(_) => "config",
            Command::Console => "console",
            Command::Completion(_) => "completion",
            Command::GetAuthStatus => "getAuthStatus",
            Command::Refresh => "refresh",
            Command::GetKeyInfo(_) => "getKeyInfo",
            Command::GetBalance(_) => "getBalance",
            Command::GetVersion => "getVersion",
            Command::GetConfig(_) => "getConfig",
            Command::EcosystemCount => "ecosystemCount",
            Command::MaxBlock => "maxBlock",
            Command::TransactionCount => "transactionCount",
            Command::KeysCount => "keysCount",
            Command::HonorNodesCount => "honorNodesCount",
            Command::DetailedBlocks(_) => "detailedBlocks",
            Command::GetBlockInfo(_) => "getBlockInfo",
            Command::BlocksTxInfo(_) => "blocksTxInfo",
            Command::DetailedBlock(_) => "detailedBlock",
            Command::BlockTxCount(_) => "blockTxCount",
            Command::EcosystemInfo(_) => "ecosystemInfo",
            Command::GetMemberInfo(_) => "getMemberInfo",
            Command::GetTableCount(_) => "getTableCount",
            Command::GetTable(_) => "getTable",
            Command::GetRow(_) => "getRow",
            Command::GetList(_) => "getList",
            Command::GetHistory(_) => "getHistory",
            Command::GetContracts(_) => "getContracts",
            Command::GetContractInfo(_) => "getContractInfo",
            Command::GetSections(_) => "getSections",
            Command::GetPageRow(_) => "getPageRow",
            Command::GetMenuRow(_) => "getMenuRow",
            Command::GetSnippetRow(_) => "getSnippetRow",
            Command::GetAppContent(_) => "getAppContent",
            Command::AppParams(_) => "appParams",
            Command::EcosystemParams(_) => "ecosystemParams",
            Command::SystemParams(_) => "systemParams",
            Command::CallContract(_) => "callContract",
            Command::CallUtxo(_) => "callUtxo",
        }
    }
}

/// Words offered by console tab completion.
pub const SUGGESTIONS: &[&str] = &[
    "version",
    "config",
    "completion bash",
    "completion zsh",
    "completion fish",
    "completion powershell",
    "getAuthStatus",
    "refresh",
    "getKeyInfo",
    "getBalance",
    "getVersion",
    "getConfig centrifugo",
    "ecosystemCount",
    "maxBlock",
    "transactionCount",
    "keysCount",
    "honorNodesCount",
    "detailedBlocks",
    "getBlockInfo",
    "blocksTxInfo",
    "detailedBlock",
    "blockTxCount",
    "ecosystemInfo",
    "getMemberInfo",
    "getTableCount",
    "getTable",
    "getRow --id",
    "getList",
    "getHistory",
    "getContracts",
    "getContractInfo",
    "getSections",
    "getPageRow",
    "getMenuRow",
    "getSnippetRow",
    "getAppContent",
    "appParams",
    "ecosystemParams",
    "systemParams",
    "callContract",
    "callUtxo Transfer",
    "callUtxo ContractToUTXO",
    "callUtxo UTXOToContract",
    "exit",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::from_iter_safe(std::iter::once(BIN_NAME).chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_globals_and_command() {
        let cli = parse(&["--rpcPort", "8000", "--path", "x/config.json", "maxBlock"]);
        assert_eq!(cli.global.rpc_port, Some(8000));
        assert_eq!(cli.global.path, Some(PathBuf::from("x/config.json")));
        assert_eq!(cli.cmd.name(), "maxBlock");
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(Cli::from_iter_safe(&[BIN_NAME, "getNothing"]).is_err());
    }

    #[test]
    fn test_every_suggestion_resolves() {
        for suggestion in SUGGESTIONS {
            let name = suggestion.split_whitespace().next().unwrap();
            if name == "exit" {
                continue;
            }
            let err = Cli::from_iter_safe(&[BIN_NAME, name, "--help"]).unwrap_err();
            assert_eq!(
                err.kind,
                structopt::clap::ErrorKind::HelpDisplayed,
                "suggestion {} does not resolve",
                suggestion
            );
        }
    }
}
