// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process command implementation.

use jobtag::cli::{Cli, OutputFormat, ProcessArgs};
use jobtag::config::Config;
use jobtag::discovery;
use jobtag::error::ExitCode;
use jobtag::input::{self, InputSource};
use jobtag::output::json::JsonFormatter;
use jobtag::output::text::TextFormatter;
use jobtag::pipeline::Pipeline;

/// Run the process command.
pub fn run(cli: &Cli, args: &ProcessArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let mut config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    apply_overrides(&mut config, args);

    let source = InputSource::from_arg(args.input.as_deref());
    let postings = input::read_postings(&source)?;

    let output = Pipeline::from_config(&config).process(postings);

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(cli.color_choice());
            for posting in &output.postings {
                formatter.write_posting(posting)?;
            }
            formatter.write_stats(&output.stats)?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::stdout();
            for posting in &output.postings {
                formatter.write_line(&posting.to_row())?;
            }
        }
    }

    Ok(ExitCode::Success)
}

/// CLI keywords replace configured ones; exclusions accumulate.
fn apply_overrides(config: &mut Config, args: &ProcessArgs) {
    if !args.keywords.is_empty() {
        config.filter.keywords = args.keywords.clone();
    }
    config
        .filter
        .excluded_companies
        .extend(args.exclude_companies.iter().cloned());
    if args.case_sensitive {
        config.filter.case_sensitive = true;
    }
    if args.no_dedup {
        config.dedup.enabled = false;
    }
}
