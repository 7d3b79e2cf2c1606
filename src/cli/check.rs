use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use nestcheck::{
    Backend, Config, Diagnostic, DynamicArray, LinkedSequence, List, Report, TagName, Validator,
    Verdict,
};
use tracing::instrument;

use super::terminal::{Tone, paint};

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One message per line, printed as each line is read
    #[default]
    Text,
    /// The full report as JSON, printed at the end
    Json,
}

#[derive(Debug)]
pub struct Check {
    pub input: PathBuf,
    pub output: OutputFormat,
    pub quiet: bool,
}

impl Check {
    #[instrument(level = "debug", skip(self), fields(input = %self.input.display()))]
    pub fn run(&self, config: &Config) -> anyhow::Result<Report> {
        let report = match config.backend {
            Backend::Array => {
                self.validate(DynamicArray::with_capacity(config.initial_capacity.get()))?
            }
            Backend::Linked => self.validate(LinkedSequence::new())?,
        };

        match self.output {
            OutputFormat::Text => self.print_verdict(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(report)
    }

    /// Streams the input through a validator, printing text diagnostics as
    /// soon as each line yields them.
    fn validate<L: List<TagName>>(&self, backing: L) -> anyhow::Result<Report> {
        let file = File::open(&self.input)
            .with_context(|| format!("Error reading file: {}", self.input.display()))?;
        tracing::info!("checking {}", self.input.display());

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut validator = Validator::with_backing(backing);
        loop {
            let line = read_line_lossy(&mut reader, &mut buf).with_context(|| {
                format!(
                    "Error reading file: {} (after line {})",
                    self.input.display(),
                    validator.line_number()
                )
            })?;
            let Some(line) = line else { break };
            let emitted = validator.feed_line(&line);
            if matches!(self.output, OutputFormat::Text) {
                emitted.iter().for_each(print_diagnostic);
            }
        }

        let already_printed = validator.diagnostics().len();
        let report = validator.finish();
        if matches!(self.output, OutputFormat::Text) {
            report.diagnostics()[already_printed..]
                .iter()
                .for_each(print_diagnostic);
        }
        Ok(report)
    }

    fn print_verdict(&self, report: &Report) {
        if report.verdict() == Verdict::WellFormed && !self.quiet {
            println!("{}", paint(&report.verdict().to_string(), Tone::Success));
        }
    }
}

/// Reads one line, replacing invalid UTF-8 instead of failing on it.
///
/// Returns `None` at end of input. The line terminator (`\n` or `\r\n`) is
/// stripped.
fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    println!("{}", paint(&diagnostic.to_string(), Tone::Anomaly));
}
