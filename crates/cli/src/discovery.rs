//! Locating the effective jobtag.toml.
//!
//! An explicit path (`-C` or `JOBTAG_CONFIG`) must exist. Otherwise the
//! search runs from the working directory up through its ancestors and stops
//! at the first directory holding `.git`. No file means built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "jobtag.toml";

/// Where the effective configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or in the environment.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No file; built-in defaults apply.
    Defaults,
}

impl ConfigSource {
    /// Pick the config source for a run started in `cwd`.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                });
            }
            return Ok(Self::Explicit(path.to_path_buf()));
        }
        Ok(find_config(cwd).map_or(Self::Defaults, Self::Discovered))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Discovered(path) => Some(path),
            Self::Defaults => None,
        }
    }

    /// Parse the file, warning on unknown keys, or build the defaults.
    pub fn load(&self) -> Result<Config> {
        tracing::debug!("{}", self);
        match self.path() {
            Some(path) => config::load_with_warnings(path),
            None => Ok(Config {
                version: config::SUPPORTED_VERSION,
                ..Config::default()
            }),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "loading config from {}", path.display()),
            Self::Discovered(path) => {
                write!(f, "loading config from {} (discovered)", path.display())
            }
            Self::Defaults => write!(f, "no {CONFIG_FILE_NAME} found, using defaults"),
        }
    }
}

/// Nearest jobtag.toml at or above `start_dir`, not crossing a git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Locate and load the effective config.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    ConfigSource::locate(explicit, cwd)?.load()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
