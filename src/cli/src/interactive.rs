//! Starts the interactive console.

use crate::context::Context;
use crate::dispatch::CommandDispatcher;
use crate::opts::SUGGESTIONS;
use colored::Colorize;
use console::{Completions, Console, EditorReader, ExitReason, Session};
use tokio::runtime::Handle;
use tracing::debug;

/// Console greeting.
pub const BANNER: &str = "Welcome to the IBAX console!\nTo exit, press ctrl-d or type exit";

/// Runs the console until exit, end of input or a fatal error.
///
/// The config must load before the console starts, since it names the
/// history directory. Failing to create that directory is fatal.
pub fn run_console(mut ctx: Context, handle: &Handle) -> anyhow::Result<ExitReason> {
    let config = ctx.load_config()?;

    println!("\n{}", BANNER.bold());

    let completions = Completions::new();
    completions.register(SUGGESTIONS.iter().copied());
    debug!("Registered {} completions", completions.len());

    let session = Session::open(config.history_dir(), completions.clone(), handle)?;
    ctx.enter_console(session.nonce(), session.signals());

    let reader = EditorReader::new(completions)?;
    let dispatcher = CommandDispatcher::new(ctx, handle.clone());
    Ok(Console::new(session, reader, dispatcher).run())
}
