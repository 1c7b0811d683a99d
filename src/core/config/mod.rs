//! core::config
//!
//! Tool configuration schema and loading.
//!
//! # Overview
//!
//! git-track reads a single optional user-level TOML file. It only carries
//! output defaults; the remotes being edited live in the repository's own
//! git config and are handled by [`crate::git`].
//!
//! # Precedence
//!
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (OR-ed on top by the CLI layer)
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GIT_TRACK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-track/config.toml`
//! 3. `~/.git-track/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use git_track::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("debug: {}", config.debug());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GIT_TRACK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if one was found)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    /// A missing file is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_global() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Locate the first existing global config file.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $GIT_TRACK_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/git-track/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("git-track/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.git-track/config.toml
        dirs::home_dir()
            .map(|home| home.join(".git-track/config.toml"))
            .filter(|path| path.exists())
    }

    /// Path of the file this config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether debug diagnostics are on by default.
    ///
    /// Defaults to `false`.
    pub fn debug(&self) -> bool {
        self.global.debug.unwrap_or(false)
    }

    /// Whether quiet mode is on by default.
    ///
    /// Defaults to `false`.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }
}
