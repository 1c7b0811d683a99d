//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// git-track - Selectively track extra remote branches
#[derive(Parser, Debug)]
#[command(name = "git-track")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Run as if git-track was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse the given arguments (first item is the binary name).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Parser::try_parse_from(args)
    }
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Track a branch pattern on every remote
    #[command(
        name = "add",
        long_about = "Track a branch pattern on every remote.\n\n\
            Appends +refs/heads/<branch>*:refs/remotes/origin/<branch>* to the \
            fetch list of each configured remote. Adding the same branch twice \
            stores it twice.",
        after_help = "\
EXAMPLES:
    # Mirror release, release-1.0, release/2, ...
    git track add release"
    )]
    Add {
        /// Branch name or prefix to track
        branch: String,
    },

    /// Stop tracking a branch pattern
    #[command(
        name = "rm",
        long_about = "Stop tracking a branch pattern.\n\n\
            Removes every fetch refspec for <branch> from every remote. Other \
            refspecs are kept in their original order."
    )]
    Remove {
        /// Branch name or prefix previously added
        branch: String,
    },

    /// List tracked branch patterns
    #[command(name = "ls")]
    List,
}
