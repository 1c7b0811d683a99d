//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to all Git operations in
//! git-track. Repository opening and the reading and rewriting of
//! `remote.<name>.fetch` values all go through [`Git`], which normalizes
//! `git2` failures into [`GitError`] categories.
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: no enclosing repository
//! - [`GitError::OpenFailed`]: a `.git` marker exists but is not a usable repository
//! - [`GitError::ConfigLoad`]: reading remotes from the git config failed
//! - [`GitError::ConfigSave`]: rewriting the git config failed
//!
//! # Example
//!
//! ```ignore
//! use git_track::git::{locate_repository, Git};
//! use std::path::Path;
//!
//! let git = Git::open(&locate_repository(Path::new("."))?)?;
//! let mut remotes = git.load_remotes()?;
//! remotes.track("release");
//! git.save_remotes(&remotes)?;
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::refspec::RefSpec;
use crate::core::remotes::{Remote, RemoteConfig};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository (or any of the parent directories): {path}")]
    NotARepo {
        /// The path the search started from
        path: PathBuf,
    },

    /// The repository marker exists but the repository cannot be opened.
    #[error("unable to open repository at {path}: {message}")]
    OpenFailed {
        /// The located repository root
        path: PathBuf,
        /// Description of the problem
        message: String,
    },

    /// Reading the repository configuration failed.
    #[error("unable to read repository configuration: {message}")]
    ConfigLoad {
        /// The error message
        message: String,
    },

    /// Writing the repository configuration failed.
    #[error("failure to set config: {message}")]
    ConfigSave {
        /// The error message
        message: String,
    },
}

impl GitError {
    fn load(err: git2::Error, context: &str) -> Self {
        GitError::ConfigLoad {
            message: format!("{}: {}", context, err.message()),
        }
    }

    fn save(err: git2::Error, context: &str) -> Self {
        GitError::ConfigSave {
            message: format!("{}: {}", context, err.message()),
        }
    }
}

/// The Git interface.
///
/// Owned by the process for one invocation. No other module imports `git2`.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
    /// The directory the repository was opened from
    root: PathBuf,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git").field("root", &self.root).finish()
    }
}

impl Git {
    /// Open the repository rooted at `root`.
    ///
    /// `root` is expected to come from [`super::locate_repository`]; no
    /// further discovery is performed.
    ///
    /// # Errors
    ///
    /// [`GitError::OpenFailed`] if `root` does not hold a valid repository.
    pub fn open(root: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::open(root).map_err(|e| GitError::OpenFailed {
            path: root.to_path_buf(),
            message: e.message().to_string(),
        })?;

        Ok(Self {
            repo,
            root: root.to_path_buf(),
        })
    }

    /// The directory the repository was opened from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Open the repository-level config file (`.git/config`).
    fn local_config(&self) -> Result<git2::Config, git2::Error> {
        self.repo
            .config()
            .and_then(|cfg| cfg.open_level(git2::ConfigLevel::Local))
    }

    /// Read every remote and its fetch refspecs from the local config.
    ///
    /// Only `.git/config` is consulted, the same file [`Git::save_remotes`]
    /// writes; values inherited from user or system config are ignored.
    /// Remotes come back sorted by name. Names and refspecs that are not
    /// valid UTF-8 are skipped.
    pub fn load_remotes(&self) -> Result<RemoteConfig, GitError> {
        let local = self
            .local_config()
            .and_then(|mut cfg| cfg.snapshot())
            .map_err(|e| GitError::load(e, "opening local config"))?;

        let mut names = BTreeSet::new();
        let mut entries = local
            .entries(Some(r"^remote\."))
            .map_err(|e| GitError::load(e, "listing remotes"))?;
        while let Some(entry) = entries.next() {
            let entry = entry.map_err(|e| GitError::load(e, "listing remotes"))?;
            if let Some(name) = entry.name().and_then(remote_name) {
                names.insert(name.to_string());
            }
        }

        let mut remotes = Vec::with_capacity(names.len());
        for name in names {
            let key = format!("remote.{}.fetch", name);
            let mut fetch = Vec::new();

            match local.multivar(&key, None) {
                Ok(mut values) => {
                    while let Some(entry) = values.next() {
                        let entry = entry.map_err(|e| GitError::load(e, &key))?;
                        if let Some(value) = entry.value() {
                            fetch.push(RefSpec::new(value));
                        }
                    }
                }
                // Remote without fetch refspecs
                Err(e) if e.code() == git2::ErrorCode::NotFound => {}
                Err(e) => return Err(GitError::load(e, &key)),
            }

            remotes.push(Remote::new(name, fetch));
        }

        Ok(RemoteConfig::new(remotes))
    }

    /// Write every remote's fetch list back to the repository's local config.
    ///
    /// Each `remote.<name>.fetch` multivar is cleared and rewritten in the
    /// snapshot's order, so the result mirrors `config` exactly. Remotes not
    /// present in `config` are left alone.
    pub fn save_remotes(&self, config: &RemoteConfig) -> Result<(), GitError> {
        let mut local = self
            .local_config()
            .map_err(|e| GitError::save(e, "opening local config"))?;

        for remote in config.remotes() {
            let key = format!("remote.{}.fetch", remote.name());

            match local.remove_multivar(&key, ".*") {
                Ok(()) => {}
                // Nothing to clear
                Err(e) if e.code() == git2::ErrorCode::NotFound => {}
                Err(e) => return Err(GitError::save(e, &key)),
            }

            for spec in remote.fetch() {
                // "^$" matches no existing value, so each call appends
                local
                    .set_multivar(&key, "^$", spec.as_str())
                    .map_err(|e| GitError::save(e, &key))?;
            }
        }

        Ok(())
    }
}

/// Extract `<name>` from a `remote.<name>.<var>` config key.
///
/// Remote names may themselves contain dots.
fn remote_name(key: &str) -> Option<&str> {
    key.strip_prefix("remote.")?
        .rsplit_once('.')
        .map(|(name, _)| name)
        .filter(|name| !name.is_empty())
}
