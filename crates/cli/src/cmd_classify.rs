// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classify command implementation.

use jobtag::classify::Classifier;
use jobtag::cli::{ClassifyArgs, Cli, OutputFormat};
use jobtag::error::ExitCode;
use jobtag::input::InputSource;
use jobtag::output::ClassifyReport;
use jobtag::output::json::JsonFormatter;
use jobtag::output::text::TextFormatter;

/// Run the classify command.
pub fn run(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
    let description = match (&args.description, &args.description_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => InputSource::from_arg(Some(path.as_path())).read_to_string()?,
        (None, None) => String::new(),
    };

    let classifier = Classifier::builtin();
    let classification = classifier.classify(&args.title, &description);
    let scores = args
        .explain
        .then(|| classifier.scores(&args.title, &description));

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(cli.color_choice());
            formatter.write_classification(&classification, scores.as_deref())?;
        }
        OutputFormat::Json => {
            JsonFormatter::stdout().write(&ClassifyReport {
                classification,
                scores,
            })?;
        }
    }

    Ok(ExitCode::Success)
}
