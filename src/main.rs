//! Command-line tag nesting checker.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<ExitCode> {
    cli::Cli::parse().run()
}
