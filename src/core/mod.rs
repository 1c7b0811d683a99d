//! core
//!
//! Domain types for git-track.
//!
//! # Modules
//!
//! - [`refspec`] - Branch name to fetch refspec encoding
//! - [`remotes`] - In-memory remotes and fetch lists
//! - [`config`] - Tool configuration schema and loading
//!
//! Nothing in this module performs Git I/O; see [`crate::git`].

pub mod config;
pub mod refspec;
pub mod remotes;
