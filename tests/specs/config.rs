//! Behavioral specs for configuration.
//!
//! Tests that jobtag correctly handles:
//! - Config discovery up to the git root
//! - Explicit config via flag and environment
//! - Version validation and unknown keys

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const POSTINGS: &str = concat!(
    r#"{"title": "Backend Engineer", "company": "Acme", "description": "Python and SQL"}"#,
    "\n",
    r#"{"title": "Backend Engineer", "company": "Hooli", "description": "Go and SQL"}"#,
    "\n",
);

// =============================================================================
// Discovery
// =============================================================================

/// > jobtag.toml in the working directory configures the filter
#[test]
fn discovered_config_filters_postings() {
    let temp = Project::empty();
    temp.config("[filter]\nkeywords = [\"python\"]");
    process()
        .pwd(temp.path())
        .stdin(POSTINGS)
        .passes()
        .stdout_has("2 read, 1 rejected, 0 duplicates, 1 classified\n");
}

/// > Discovery walks up from subdirectories
#[test]
fn discovery_walks_up() {
    let temp = Project::empty();
    temp.config("[filter]\nexcluded_companies = [\"hooli\"]");
    temp.file("jobs/today/.keep", "");
    process()
        .pwd(temp.path().join("jobs/today"))
        .stdin(POSTINGS)
        .passes()
        .stdout_lacks("Hooli")
        .stdout_has("1 rejected");
}

/// > Fixture directories carry their own config
#[test]
fn fixture_config_is_used() {
    process()
        .on("filtered")
        .args(&[postings_fixture()])
        .passes()
        .stdout_lacks("Staffing Co")
        .stdout_has("5 read, 2 rejected, 1 duplicate, 2 classified\n");
}

/// > CLI keywords replace configured ones
#[test]
fn cli_keywords_replace_config() {
    let temp = Project::empty();
    temp.config("[filter]\nkeywords = [\"python\"]");
    process()
        .pwd(temp.path())
        .args(&["-k", "go"])
        .stdin(POSTINGS)
        .passes()
        .stdout_has("Backend Engineer at Hooli")
        .stdout_lacks("Acme");
}

/// > dedup can be disabled in config
#[test]
fn dedup_disabled_in_config() {
    let temp = Project::empty();
    temp.config("[dedup]\nenabled = false");
    let line = r#"{"title": "SRE", "company": "Acme", "description": "same"}"#;
    process()
        .pwd(temp.path())
        .stdin(format!("{line}\n{line}\n"))
        .passes()
        .stdout_has("2 read, 0 rejected, 0 duplicates, 2 classified\n");
}

// =============================================================================
// Explicit Config
// =============================================================================

/// > -C points at a config outside the working directory
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("conf/custom.toml", "version = 1\n[filter]\nkeywords = [\"python\"]\n");
    let path = temp.path().join("conf/custom.toml");
    process()
        .args(&["-C", path.to_str().unwrap()])
        .stdin(POSTINGS)
        .passes()
        .stdout_has("1 rejected");
}

/// > JOBTAG_CONFIG is the environment form of -C
#[test]
fn config_from_environment() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[filter]\nkeywords = [\"go\"]\n");
    let path = temp.path().join("custom.toml");
    process()
        .env("JOBTAG_CONFIG", path.to_str().unwrap())
        .stdin(POSTINGS)
        .passes()
        .stdout_has("Hooli")
        .stdout_lacks("Acme");
}

/// > A missing explicit config is a config error (exit 2)
#[test]
fn missing_explicit_config() {
    process()
        .args(&["-C", "nowhere.toml"])
        .stdin("")
        .exits(2)
        .stderr_has("jobtag: config error: config file not found: nowhere.toml");
}

// =============================================================================
// Validation
// =============================================================================

/// > Unsupported versions are rejected (exit 2)
#[test]
fn unsupported_version() {
    let temp = Project::empty();
    temp.raw_config("version = 2\n");
    process()
        .pwd(temp.path())
        .stdin("")
        .exits(2)
        .stderr_has("unsupported config version 2 (supported: 1)");
}

/// > A config without a version is rejected
#[test]
fn missing_version() {
    let temp = Project::empty();
    temp.raw_config("[filter]\nkeywords = [\"rust\"]\n");
    process().pwd(temp.path()).stdin("").exits(2).stderr_has("config error");
}

/// > Malformed TOML is a config error
#[test]
fn malformed_toml() {
    let temp = Project::empty();
    temp.raw_config("version = 1\n[filter\n");
    process().pwd(temp.path()).stdin("").exits(2).stderr_has("config error");
}

/// > Unknown keys warn on stderr but do not fail
#[test]
fn unknown_keys_warn() {
    let temp = Project::empty();
    temp.config("colour = true\n[filter]\nkeywords = [\"sql\"]\nregion = \"eu\"");
    process()
        .pwd(temp.path())
        .stdin(POSTINGS)
        .passes()
        .stderr_has("jobtag: warning:")
        .stderr_has("unrecognized field `colour` (ignored)")
        .stderr_has("unrecognized field `filter.region` (ignored)")
        .stdout_has("2 classified");
}
