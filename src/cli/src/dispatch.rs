//! Runs console lines through the command tree.

use crate::commands::execute;
use crate::context::Context;
use crate::errors::CliError;
use crate::opts::{Cli, BIN_NAME};
use structopt::clap::{App, ErrorKind};
use structopt::StructOpt;
use tokio::runtime::Handle;

/// Parses each console line into a fresh [`Cli`] and executes it.
///
/// The clap tree is built once. Parsed values live only in the `Cli` of one
/// line, so flags given on a previous line never leak into the next.
pub struct CommandDispatcher {
    tree: App<'static, 'static>,
    ctx: Context,
    handle: Handle,
}

impl CommandDispatcher {
    pub fn new(ctx: Context, handle: Handle) -> Self {
        Self {
            tree: Cli::clap(),
            ctx,
            handle,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Parses console arguments. `None` when clap printed help or version.
    pub fn parse(&mut self, args: &[String]) -> Result<Option<Cli>, CliError> {
        let argv = std::iter::once(BIN_NAME).chain(args.iter().map(String::as_str));
        match self.tree.get_matches_from_safe_borrow(argv) {
            Ok(matches) => Ok(Some(Cli::from_clap(&matches))),
            Err(e) if matches!(e.kind, ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed) => {
                println!("{}", e.message);
                Ok(None)
            }
            Err(e) => Err(CliError::Usage(e.message)),
        }
    }

    /// Parses and runs one console line.
    pub fn run_line(&mut self, args: &[String]) -> Result<(), CliError> {
        let Some(cli) = self.parse(args)? else {
            return Ok(());
        };
        self.ctx.merge_globals(cli.global);
        self.handle.block_on(execute(cli.cmd, &mut self.ctx))
    }
}

impl console::Dispatch for CommandDispatcher {
    fn dispatch(&mut self, args: &[String]) -> anyhow::Result<()> {
        self.run_line(args)?;
        Ok(())
    }
}
