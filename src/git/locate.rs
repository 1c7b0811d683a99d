//! git::locate
//!
//! Filesystem search for the enclosing repository.
//!
//! Unlike `git2::Repository::discover`, this only looks for a `.git` entry
//! and never consults `GIT_DIR` or ceiling directories.

use std::path::{Path, PathBuf};

use super::GitError;

/// Name of the entry that marks a working tree root.
pub const REPO_MARKER: &str = ".git";

/// Walk up from `start` to the nearest directory (inclusive) containing a
/// `.git` directory or file.
///
/// # Errors
///
/// [`GitError::NotARepo`] if `start` cannot be resolved or the filesystem
/// root is reached without a match.
///
/// # Example
///
/// ```no_run
/// use git_track::git::locate_repository;
/// use std::path::Path;
///
/// let root = locate_repository(Path::new("src/core"))?;
/// println!("repository at {}", root.display());
/// # Ok::<(), git_track::git::GitError>(())
/// ```
pub fn locate_repository(start: &Path) -> Result<PathBuf, GitError> {
    locate_with_marker(start, REPO_MARKER)
}

pub(crate) fn locate_with_marker(start: &Path, marker: &str) -> Result<PathBuf, GitError> {
    let not_found = || GitError::NotARepo {
        path: start.to_path_buf(),
    };

    let start = start.canonicalize().map_err(|_| not_found())?;

    let mut current = start.as_path();
    loop {
        // .git is a directory for normal repos and a file for worktrees
        if current.join(marker).exists() {
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return Err(not_found()),
        }
    }
}
