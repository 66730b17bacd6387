// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tags command implementation.

use jobtag::cli::{Cli, OutputFormat, TagsArgs};
use jobtag::error::ExitCode;
use jobtag::output::TagListing;
use jobtag::output::json::JsonFormatter;
use jobtag::output::text::TextFormatter;

/// Run the tags command.
pub fn run(cli: &Cli, args: &TagsArgs) -> anyhow::Result<ExitCode> {
    let listing = TagListing::builtin();
    match args.output {
        OutputFormat::Text => {
            TextFormatter::stdout(cli.color_choice()).write_tags(&listing)?;
        }
        OutputFormat::Json => JsonFormatter::stdout().write(&listing)?,
    }
    Ok(ExitCode::Success)
}
