// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary command implementation.

use jobtag::classify::Classifier;
use jobtag::cli::{Cli, OutputFormat, SummaryArgs};
use jobtag::error::ExitCode;
use jobtag::input::{self, InputSource};
use jobtag::output::json::JsonFormatter;
use jobtag::output::text::TextFormatter;
use jobtag::posting::PostingRow;
use jobtag::summary::summarize_rows;

/// Run the summary command.
pub fn run(cli: &Cli, args: &SummaryArgs) -> anyhow::Result<ExitCode> {
    let source = InputSource::from_arg(args.input.as_deref());
    let classifier = Classifier::builtin();
    let rows: Vec<PostingRow> = input::read_records(&source)?
        .into_iter()
        .map(|record| record.into_row(classifier))
        .collect();

    let summary = summarize_rows(&rows);

    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(cli.color_choice()).write_summary(&summary)?;
        }
        OutputFormat::Json => JsonFormatter::stdout().write(&summary)?,
    }

    Ok(ExitCode::Success)
}
