//! engine
//!
//! Per-invocation state shared by every command.
//!
//! # Lifecycle
//!
//! ```text
//! Locate → Open → Load → (one command mutates) → Persist
//! ```
//!
//! Each step before the command is an unconditional prerequisite; any
//! failure aborts the invocation before the repository is touched. The
//! loaded [`RemoteConfig`] is owned by a [`Session`], moved into exactly one
//! command and persisted at most once.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::remotes::RemoteConfig;
use crate::git::{locate_repository, Git};
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and the tool config.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The directory the repository search starts from.
    fn start_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to read current directory"),
        }
    }
}

/// An opened repository and its loaded remote configuration.
#[derive(Debug)]
pub struct Session {
    /// The repository handle.
    pub git: Git,
    /// The in-memory remote snapshot.
    pub remotes: RemoteConfig,
    /// Verbosity carried over from the context.
    pub verbosity: Verbosity,
}

impl Session {
    /// Locate, open and load the repository for `ctx`.
    pub fn open(ctx: &Context) -> Result<Self> {
        let verbosity = ctx.verbosity();
        let start = ctx.start_dir()?;

        let root = locate_repository(&start).context("Unable to locate git repository")?;
        output::debug(format!("repository at {}", root.display()), verbosity);

        let git = Git::open(&root).context("Unable to open repository")?;
        let remotes = git
            .load_remotes()
            .context("Unable to open repository configuration")?;
        output::debug(format!("loaded {} remote(s)", remotes.len()), verbosity);

        Ok(Self {
            git,
            remotes,
            verbosity,
        })
    }

    /// Write the remote snapshot back to the repository, consuming the session.
    pub fn persist(self) -> Result<()> {
        self.git
            .save_remotes(&self.remotes)
            .context("Unable to save repository configuration")?;
        output::debug(
            format!("configuration saved in {}", self.git.root().display()),
            self.verbosity,
        );
        Ok(())
    }
}
