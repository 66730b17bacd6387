// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synonym pattern matching for tag extraction.
//!
//! Each tag's synonym list compiles to the cheapest matcher that can answer
//! "does any synonym occur":
//! - Single plain synonym: memchr::memmem
//! - Several plain synonyms: aho-corasick
//! - Any `\b` boundary synonym: regex crate

pub mod matcher;

pub use matcher::{CompiledPattern, PatternError};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
