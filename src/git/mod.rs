//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2`, and the repository's config file is never parsed by hand.
//!
//! # Responsibilities
//!
//! - Locating the enclosing repository ([`locate_repository`])
//! - Opening it ([`Git::open`])
//! - Loading and persisting remote fetch lists
//!   ([`Git::load_remotes`], [`Git::save_remotes`])

mod interface;
mod locate;

pub use interface::{Git, GitError};
pub use locate::{locate_repository, REPO_MARKER};
