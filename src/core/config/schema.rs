//! core::config::schema
//!
//! Configuration schema types.
//!
//! Located at (in order of precedence):
//! 1. `$GIT_TRACK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-track/config.toml`
//! 3. `~/.git-track/config.toml`

use serde::Deserialize;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// debug = false
/// quiet = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Emit `[debug]` diagnostics by default
    pub debug: Option<bool>,

    /// Suppress warnings and diagnostics by default
    pub quiet: Option<bool>,
}
