// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use jobtag::cli::{Cli, MatchArgs, OutputFormat};
use jobtag::error::ExitCode;
use jobtag::input::InputSource;
use jobtag::keywords::{KeywordIndex, KeywordSet};
use jobtag::output::MatchReport;
use jobtag::output::json::JsonFormatter;
use jobtag::output::text::TextFormatter;

/// Run the match command.
///
/// Exits with [`ExitCode::Rejected`] when an `all`/`any` query is false.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => InputSource::from_arg(args.file.as_deref()).read_to_string()?,
    };

    let keywords = KeywordSet::new(&args.keywords, args.case_sensitive);
    let report = MatchReport::new(args.mode, &keywords.scan(&text));

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(cli.color_choice()).write_match(&report)?;
        }
        OutputFormat::Json => JsonFormatter::stdout().write(&report)?,
    }

    if args.mode.is_predicate() && !report.passed {
        return Ok(ExitCode::Rejected);
    }
    Ok(ExitCode::Success)
}
