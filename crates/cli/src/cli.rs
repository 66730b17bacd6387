// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use serde::Serialize;
use termcolor::ColorChoice;

use crate::color::resolve_color;

/// Classify job postings and match keyword sets against free text
#[derive(Parser)]
#[command(name = "jobtag")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "JOBTAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true, conflicts_with = "color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Flags first, then NO_COLOR / COLOR / TTY detection.
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.color {
            ColorChoice::Always
        } else {
            resolve_color()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one posting into a category with technology tags
    Classify(ClassifyArgs),
    /// Match a keyword set against text
    Match(MatchArgs),
    /// Filter, de-duplicate and classify a batch of postings
    Process(ProcessArgs),
    /// Category and tag statistics for a batch
    Summary(SummaryArgs),
    /// List categories and technology tags
    Tags(TagsArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Posting title
    #[arg(long, short = 't', default_value = "")]
    pub title: String,

    /// Posting description
    #[arg(long, short = 'd', conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read the description from a file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub description_file: Option<PathBuf>,

    /// Show per-category scores
    #[arg(long)]
    pub explain: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Keyword to search for (repeatable)
    #[arg(
        short = 'k',
        long = "keyword",
        value_name = "KEYWORD",
        required = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub keywords: Vec<String>,

    /// Text to search
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read text from a file (`-` for stdin); stdin when neither is given
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Query to evaluate
    #[arg(long, default_value = "all")]
    pub mode: MatchMode,

    /// Match case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ProcessArgs {
    /// JSON Lines or JSON array of postings (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Required keyword (repeatable, replaces configured keywords)
    #[arg(
        short = 'k',
        long = "keyword",
        value_name = "KEYWORD",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub keywords: Vec<String>,

    /// Reject postings from this company (repeatable, adds to config)
    #[arg(long = "exclude-company", value_name = "COMPANY")]
    pub exclude_companies: Vec<String>,

    /// Match filter keywords case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Keep duplicate postings
    #[arg(long)]
    pub no_dedup: bool,

    /// Output format (json emits one row per line)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct SummaryArgs {
    /// Postings or processed rows (`-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct TagsArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Keyword query evaluated by `jobtag match`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every keyword occurs
    #[default]
    All,
    /// At least one keyword occurs
    Any,
    /// Fraction of keywords found
    Score,
    /// Occurrences per found keyword
    Counts,
}

impl MatchMode {
    /// Whether the mode answers yes/no and sets the exit code.
    pub fn is_predicate(self) -> bool {
        matches!(self, MatchMode::All | MatchMode::Any)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
