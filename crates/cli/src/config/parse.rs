// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::{DedupConfig, FilterConfig};

const KNOWN_FILTER_KEYS: &[&str] = &["keywords", "case_sensitive", "excluded_companies"];
const KNOWN_DEDUP_KEYS: &[&str] = &["enabled"];

/// Parse a TOML array of strings into a Vec<String>.
pub(super) fn parse_string_array(value: Option<&toml::Value>) -> Option<Vec<String>> {
    value?.as_array().map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

/// Parse a TOML array of strings, returning empty vec if not found.
pub(super) fn parse_string_array_or_empty(value: Option<&toml::Value>) -> Vec<String> {
    parse_string_array(value).unwrap_or_default()
}

/// Parse a TOML boolean with a default.
pub(super) fn parse_bool_or(value: Option<&toml::Value>, default: bool) -> bool {
    value.and_then(|v| v.as_bool()).unwrap_or(default)
}

/// Parse `[filter]` from TOML value.
pub(super) fn parse_filter_config(value: Option<&toml::Value>, path: &Path) -> FilterConfig {
    let Some(toml::Value::Table(t)) = value else {
        return FilterConfig::default();
    };

    warn_unknown_keys(path, "filter", t, KNOWN_FILTER_KEYS);

    FilterConfig {
        keywords: parse_string_array_or_empty(t.get("keywords")),
        case_sensitive: parse_bool_or(t.get("case_sensitive"), false),
        excluded_companies: parse_string_array_or_empty(t.get("excluded_companies")),
    }
}

/// Parse `[dedup]` from TOML value.
pub(super) fn parse_dedup_config(value: Option<&toml::Value>, path: &Path) -> DedupConfig {
    let Some(toml::Value::Table(t)) = value else {
        return DedupConfig::default();
    };

    warn_unknown_keys(path, "dedup", t, KNOWN_DEDUP_KEYS);

    DedupConfig {
        enabled: parse_bool_or(t.get("enabled"), DedupConfig::default_enabled()),
    }
}

fn warn_unknown_keys(path: &Path, section: &str, table: &toml::Table, known: &[&str]) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", section, key));
        }
    }
}

/// Print a warning for an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "jobtag: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
