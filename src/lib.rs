//! git-track - Selectively track extra remote branches
//!
//! git-track edits the `remote.<name>.fetch` refspec lists of the enclosing
//! repository so that `git fetch` also mirrors chosen branch patterns:
//!
//! ```text
//! git track add release   # +refs/heads/release*:refs/remotes/origin/release*
//! git track ls            # release
//! git track rm release
//! ```
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing, exit codes, command handlers
//! - [`engine`] - Per-invocation context and session (locate, open, load, persist)
//! - [`core`] - Refspec encoding, in-memory remotes, tool configuration
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Output and diagnostics

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod ui;
