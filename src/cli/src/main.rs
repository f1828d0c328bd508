//! Command-line RPC client for IBAX nodes.

use anyhow::Result;
use cli::{execute, run_console, Cli, Command, Context};
use console::ExitReason;
use structopt::StructOpt;
use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let cli = Cli::from_args();
    let ctx = Context::new(cli.global);

    // The console blocks on line input, so it drives the runtime from this
    // thread instead of running inside it.
    let rt = Runtime::new()?;
    match cli.cmd {
        Command::Console => {
            // the terminal is already released when the loop returns
            if run_console(ctx, rt.handle())? == ExitReason::Fatal {
                std::process::exit(1);
            }
        }
        cmd => {
            let mut ctx = ctx;
            rt.block_on(execute(cmd, &mut ctx))?;
        }
    }

    Ok(())
}
