// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Reports are written as one pretty-printed document; batches of rows are
//! written as JSON Lines so they can be piped back into `jobtag summary`.

use std::io::Write;

use serde::Serialize;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl JsonFormatter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one pretty-printed document.
    pub fn write<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write one compact line.
    pub fn write_line<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
