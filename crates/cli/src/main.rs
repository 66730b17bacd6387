// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jobtag CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use jobtag::cli::{Cli, Command};
use jobtag::error::ExitCode;

mod cmd_classify;
mod cmd_match;
mod cmd_process;
mod cmd_summary;
mod cmd_tags;

fn init_logging() {
    let filter = EnvFilter::try_from_env("JOBTAG_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("jobtag: {}", e);
            match e.downcast_ref::<jobtag::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Classify(args)) => cmd_classify::run(&cli, args),
        Some(Command::Match(args)) => cmd_match::run(&cli, args),
        Some(Command::Process(args)) => cmd_process::run(&cli, args),
        Some(Command::Summary(args)) => cmd_summary::run(&cli, args),
        Some(Command::Tags(args)) => cmd_tags::run(&cli, args),
        Some(Command::Completions(args)) => {
            jobtag::completions::write_completions(args.shell, &mut std::io::stdout())?;
            Ok(ExitCode::Success)
        }
    }
}
