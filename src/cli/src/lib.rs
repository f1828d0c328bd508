//! Command-line RPC client for IBAX nodes.

pub mod commands;
pub mod context;
pub mod dispatch;
pub mod errors;
pub mod interactive;
pub mod opts;
pub mod output;

// Re-export commonly used types and functions
pub use commands::{execute, RpcRequest};
pub use context::{Connector, Context};
pub use dispatch::CommandDispatcher;
pub use errors::CliError;
pub use interactive::run_console;
pub use opts::{Cli, Command, GlobalOpts};
