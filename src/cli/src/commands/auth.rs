//! Authorization commands.

use crate::context::Context;
use crate::errors::CliError;
use colored::Colorize;

/// Runs the refresh command: drops the client, reloads config and logs in
/// again.
pub async fn refresh(ctx: &mut Context) -> Result<(), CliError> {
    ctx.reset_client();
    ctx.login().await?;
    println!("\n{}", "Refresh Success!!".green());
    Ok(())
}
