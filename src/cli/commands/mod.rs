//! Subcommand handlers.
//!
//! Handlers return the process exit code instead of exiting, and turn
//! preflight abort verdicts into operator-facing error output. This is
//! the only layer that decides whether the process fails.

pub mod check;
pub mod completions;
pub mod install;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Dispatch the parsed CLI to its handler, returning the exit code.
pub fn dispatch(cli: &Cli, project_root: &Path, ui: &mut dyn UserInterface) -> Result<u8> {
    match &cli.command {
        Commands::Check => check::run(project_root, ui),
        Commands::Install(args) => install::run(project_root, args, ui),
        Commands::Completions(args) => completions::run(args),
    }
}
