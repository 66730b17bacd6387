//! Behavioral specs for output infrastructure.
//!
//! Tests that jobtag correctly handles:
//! - Color control via flags and environment
//! - Diagnostic logging on stderr

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const ANSI: &str = "\x1b[";

// =============================================================================
// Color
// =============================================================================

/// > Piped output is plain by default
#[test]
fn piped_output_has_no_color() {
    tags().passes().stdout_lacks(ANSI);
}

/// > --color forces escape codes even when piped
#[test]
fn color_flag_forces_color() {
    classify()
        .args(&["--color", "--title", "Backend Engineer"])
        .passes()
        .stdout_has(ANSI)
        .stdout_has("Backend");
}

/// > --no-color wins over COLOR
#[test]
fn no_color_flag_disables_color() {
    tags()
        .args(&["--no-color"])
        .env("COLOR", "1")
        .passes()
        .stdout_lacks(ANSI);
}

/// > NO_COLOR disables color
#[test]
fn no_color_env_disables_color() {
    tags().env("NO_COLOR", "1").passes().stdout_lacks(ANSI);
}

/// > JSON is never colored
#[test]
fn json_ignores_color_flag() {
    let stdout = jobtag_cmd()
        .args(["tags", "-o", "json", "--color"])
        .output()
        .unwrap()
        .stdout;
    let stdout = String::from_utf8_lossy(&stdout);
    assert!(!stdout.contains(ANSI));
    serde_json::from_str::<serde_json::Value>(&stdout).unwrap();
}

// =============================================================================
// Logging
// =============================================================================

/// > Logging is off unless JOBTAG_LOG is set
#[test]
fn logging_is_silent_by_default() {
    process()
        .args(&[postings_fixture()])
        .passes()
        .stderr_eq("");
}

/// > JOBTAG_LOG=debug writes diagnostics to stderr, not stdout
#[test]
fn debug_logging_goes_to_stderr() {
    process()
        .args(&[postings_fixture()])
        .env("JOBTAG_LOG", "debug")
        .passes()
        .stderr_has("DEBUG")
        .stderr_has("no jobtag.toml found")
        .stderr_has("processed 5 postings")
        .stdout_lacks("DEBUG");
}

/// > JOBTAG_LOG=info keeps the pipeline summary only
#[test]
fn info_logging_skips_debug() {
    process()
        .args(&[postings_fixture()])
        .env("JOBTAG_LOG", "info")
        .passes()
        .stderr_has("INFO")
        .stderr_lacks("DEBUG");
}
