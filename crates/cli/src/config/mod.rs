// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles jobtag.toml parsing with version validation and unknown key warnings.

mod parse;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use parse::{parse_dedup_config, parse_filter_config, warn_unknown_key};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    filter: Option<toml::Value>,

    #[serde(default)]
    dedup: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Search filter applied by `process`.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Duplicate detection settings.
    #[serde(default)]
    pub dedup: DedupConfig,
}

/// ALL-match search filter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Keywords that must all occur in a posting's description.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Match keywords case-sensitively (default: false).
    #[serde(default)]
    pub case_sensitive: bool,

    /// Companies whose postings are always rejected.
    #[serde(default)]
    pub excluded_companies: Vec<String>,
}

/// Duplicate detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DedupConfig {
    /// Drop repeated postings (default: true).
    #[serde(default = "DedupConfig::default_enabled")]
    pub enabled: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
        }
    }
}

impl DedupConfig {
    pub(crate) fn default_enabled() -> bool {
        true
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "filter", "dedup"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade jobtag to use this config.",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;
    check_version(version, path)?;

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    if version_check.version.is_none() {
        return Err(config_error(path, "missing required field: version"));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    check_version(flexible.version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    Ok(Config {
        version: flexible.version,
        filter: parse_filter_config(flexible.filter.as_ref(), path),
        dedup: parse_dedup_config(flexible.dedup.as_ref(), path),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
