//! Line-oriented checking of tag nesting.
//!
//! This is a well-formedness check in the loosest sense: it only verifies
//! that opening and closing tags pair up and nest. Attributes, entities and
//! anything else XML-specific are ignored.
//!
//! Each call to [`Validator::feed_line`] scans one line, so a tag must open
//! and close on the same line to be recognised.

use tracing::instrument;

use crate::collections::{DynamicArray, List, Stack};

mod diagnostic;
pub use diagnostic::{Diagnostic, Report, Verdict};

mod tag;
pub use tag::{Scan, Tag, TagName, scan};

/// A single validation session.
///
/// The session owns its stack of open elements; independent runs need
/// independent validators.
///
/// ```
/// use nestcheck::{Validator, Verdict};
///
/// let mut validator = Validator::new();
/// validator.feed_line("<note>");
/// validator.feed_line("  <to>Tove</to>");
/// validator.feed_line("</note>");
///
/// let report = validator.finish();
/// assert_eq!(report.verdict(), Verdict::WellFormed);
/// assert!(report.diagnostics().is_empty());
/// ```
#[derive(Debug)]
pub struct Validator<L = DynamicArray<TagName>> {
    open: Stack<TagName, L>,
    line_number: usize,
    has_root: bool,
    root_closed: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Validator {
    /// Creates a validator whose stack is backed by a [`DynamicArray`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_backing(DynamicArray::new())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: List<TagName>> Validator<L> {
    /// Creates a validator whose stack is backed by `list`.
    ///
    /// `list` is cleared first.
    #[must_use]
    pub fn with_backing(mut list: L) -> Self {
        list.clear();
        Self {
            open: Stack::with_backing(list),
            line_number: 0,
            has_root: false,
            root_closed: false,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the number of lines consumed so far.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the diagnostics emitted so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Scans the next line of input.
    ///
    /// Returns the diagnostics this line produced.
    pub fn feed_line(&mut self, line: &str) -> &[Diagnostic] {
        self.line_number += 1;
        let first_new = self.diagnostics.len();

        for tag in scan(line) {
            tracing::trace!(line = self.line_number, ?tag, "scanned tag");
            match tag {
                Tag::ProcessingInstruction | Tag::Comment | Tag::SelfClosing => {}
                Tag::Closing(name) => self.close_tag(name),
                Tag::Opening(name) => self.open_tag(name),
            }
        }

        &self.diagnostics[first_new..]
    }

    fn close_tag(&mut self, name: &str) {
        let line = self.line_number;
        match self.open.pop() {
            Err(_) => self.emit(Diagnostic::UnexpectedClosingTag {
                line,
                name: name.into(),
            }),
            Ok(expected) if expected.as_str() != name => self.emit(Diagnostic::MismatchedTag {
                line,
                found: name.into(),
                expected,
            }),
            Ok(_) => {}
        }

        // set whenever a closing tag leaves nothing open, even a stray or
        // mismatched one
        if self.open.is_empty() {
            self.root_closed = true;
        }
    }

    fn open_tag(&mut self, name: &str) {
        self.has_root = true;
        if self.root_closed {
            self.emit(Diagnostic::ContentAfterRoot {
                line: self.line_number,
            });
        }
        self.open.push(name.into());
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "nesting anomaly");
        self.diagnostics.push(diagnostic);
    }

    /// Ends the session, reporting any elements left open.
    ///
    /// Unclosed elements are reported innermost first.
    #[must_use]
    #[instrument(level = "debug", skip(self), fields(lines = self.line_number))]
    pub fn finish(mut self) -> Report {
        let verdict = if !self.has_root {
            self.emit(Diagnostic::MissingRoot);
            Verdict::MissingRoot
        } else if self.open.is_empty() {
            Verdict::WellFormed
        } else {
            while let Ok(name) = self.open.pop() {
                self.emit(Diagnostic::UnclosedTag { name });
            }
            Verdict::Unclosed
        };

        tracing::debug!(?verdict, diagnostics = self.diagnostics.len(), "validation finished");
        Report {
            diagnostics: self.diagnostics,
            verdict,
            lines: self.line_number,
        }
    }
}

/// Validates a complete sequence of lines with a fresh [`Validator`].
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn validate_lines<I, S>(lines: I) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut validator = Validator::new();
    for line in lines {
        validator.feed_line(line.as_ref());
    }
    validator.finish()
}
