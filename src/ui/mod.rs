//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All diagnostics go through this module so `--quiet` and `--debug` are
//! honored consistently.

pub mod output;
