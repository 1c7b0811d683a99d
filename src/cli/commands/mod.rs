//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! The dispatcher opens a [`Session`] (locate, open, load) before any
//! handler runs; a failure there aborts the command. Mutating handlers take
//! the session by value and persist it exactly once. `ls` only reads.

mod add;
mod list;
mod remove;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use list::list;
pub use remove::remove;

use crate::cli::args::Command;
use crate::engine::{Context, Session};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;

    match command {
        Command::Add { branch } => add::add(session, &branch),
        Command::Remove { branch } => remove::remove(session, &branch),
        Command::List => list::list(&session.remotes, &mut std::io::stdout().lock()),
    }
}
