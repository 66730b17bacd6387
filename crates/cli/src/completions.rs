// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion scripts for jobtag.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Binary name completions are generated for.
pub const BIN_NAME: &str = "jobtag";

/// Write the completion script for `shell`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> std::io::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
