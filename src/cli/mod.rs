//! cli
//!
//! Command-line interface layer for git-track.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Map parse failures onto exit codes
//! - Delegate to command handlers
//!
//! # Exit Codes
//!
//! - `0`: success, `--help`, `--version`
//! - `1`: any fatal failure (no repository, config errors, bad arguments)
//! - `10`: missing or unrecognized subcommand (including `help` and unknown
//!   flags before the subcommand)

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::CommandFactory;

use crate::core::config::Config;
use crate::engine::Context;
use crate::ui::output;

/// Exit code for a missing or unrecognized subcommand.
pub const EXIT_UNRECOGNIZED_COMMAND: u8 = 10;

/// Shown when no valid subcommand was given.
pub const USAGE_HINT: &str = "expected 'add', 'rm', or 'ls' subcommands";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    run_from(std::env::args_os())
}

/// Run the CLI against an explicit argument list.
pub fn run_from<I, T>(args: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = match Cli::try_parse_args(args.iter().cloned()) {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err, &args),
    };

    let config = Config::load().context("Failed to load git-track configuration")?;

    // CLI flags can only turn settings on
    let ctx = Context {
        cwd: cli.cwd,
        debug: cli.debug || config.debug(),
        quiet: cli.quiet || config.quiet(),
    };
    if let Some(path) = config.path() {
        output::debug(format!("config loaded from {}", path.display()), ctx.verbosity());
    }

    commands::dispatch(cli.command, &ctx)?;
    Ok(ExitCode::SUCCESS)
}

/// Report a clap failure and choose the exit code.
///
/// An unknown flag given before any subcommand counts as an unrecognized
/// subcommand; after one, it is an ordinary argument error.
fn parse_failure(err: clap::Error, args: &[OsString]) -> Result<ExitCode> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::MissingSubcommand
        | ErrorKind::InvalidSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => unrecognized_command(),
        ErrorKind::UnknownArgument if !names_subcommand(args) => unrecognized_command(),
        _ => {
            err.print()?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn unrecognized_command() -> Result<ExitCode> {
    output::error(USAGE_HINT);
    eprintln!("\n{}", Cli::command().render_usage());
    Ok(ExitCode::from(EXIT_UNRECOGNIZED_COMMAND))
}

/// Whether `args` select one of the subcommands, ignoring other errors.
fn names_subcommand(args: &[OsString]) -> bool {
    Cli::command()
        .ignore_errors(true)
        .try_get_matches_from(args)
        .map(|matches| matches.subcommand_name().is_some())
        .unwrap_or(false)
}
