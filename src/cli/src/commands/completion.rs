//! Shell completion script generation.

use crate::errors::CliError;
use crate::opts::{Cli, BIN_NAME};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use tracing::info;

/// Arguments of `completion`.
#[derive(Debug, StructOpt)]
pub struct CompletionArgs {
    /// Target shell
    #[structopt(possible_values = &["bash", "zsh", "fish", "powershell"])]
    pub shell: Shell,

    /// Write the script to this file instead of the terminal
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
}

/// Writes the completion script for `shell` to `out`.
pub fn generate<W: Write>(shell: Shell, out: &mut W) {
    Cli::clap().gen_completions_to(BIN_NAME, shell, out);
}

/// Runs the completion command.
pub fn run(args: &CompletionArgs) -> Result<(), CliError> {
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            generate(args.shell, &mut file);
            file.flush()?;
            info!("Completion script is saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            generate(args.shell, &mut out);
            out.flush()?;
        }
    }
    Ok(())
}
