use std::{path::PathBuf, process::ExitCode};

mod check;
mod terminal;

use check::{Check, OutputFormat};
use clap::ArgAction;
use nestcheck::{Backend, Config};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Sequence backing the tag stack [array, linked] (overrides the config file)
    #[arg(long, value_name = "BACKEND")]
    backend: Option<Backend>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Do not print the success message
    #[arg(long, short)]
    quiet: bool,

    /// The document to check
    input: PathBuf,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose);

        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(backend) = self.backend {
            config.backend = backend;
        }

        let check = Check {
            input: self.input,
            output: self.output,
            quiet: self.quiet,
        };
        let report = check.run(&config)?;

        Ok(if report.verdict() == nestcheck::Verdict::WellFormed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the diagnostics
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
