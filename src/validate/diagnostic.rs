use std::fmt;

use serde::Serialize;

use super::TagName;

/// A nesting anomaly found while validating.
///
/// Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A closing tag arrived while no element was open.
    UnexpectedClosingTag {
        /// Line the closing tag is on.
        line: usize,
        /// Name in the closing tag.
        name: TagName,
    },

    /// A closing tag did not match the innermost open element.
    ///
    /// The open element is closed anyway.
    MismatchedTag {
        /// Line the closing tag is on.
        line: usize,
        /// Name in the closing tag.
        found: TagName,
        /// Name of the element that was closed.
        expected: TagName,
    },

    /// An opening tag appeared after the root element had been closed.
    ContentAfterRoot {
        /// Line the opening tag is on.
        line: usize,
    },

    /// The input contained no opening tag at all.
    MissingRoot,

    /// An element was still open at the end of the input.
    UnclosedTag {
        /// Name of the open element.
        name: TagName,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnexpectedClosingTag { line, name } => {
                write!(f, "Line {line}: Unexpected closing tag </{name}>")
            }
            Self::MismatchedTag {
                line,
                found,
                expected,
            } => write!(
                f,
                "Line {line}: Mismatched tag </{found}>, expected </{expected}>"
            ),
            Self::ContentAfterRoot { line } => {
                write!(f, "Line {line}: Content after root tag closed.")
            }
            Self::MissingRoot => f.write_str("Missing root tag"),
            Self::UnclosedTag { name } => write!(f, "Unclosed tag: <{name}>"),
        }
    }
}

/// The overall outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// A root element was found and every element was closed.
    ///
    /// Earlier diagnostics may still have been reported.
    WellFormed,
    /// No opening tag was found.
    MissingRoot,
    /// One or more elements were still open at the end of the input.
    Unclosed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Self::WellFormed => "XML document is constructed correctly.",
            Self::MissingRoot => "Missing root tag",
            Self::Unclosed => "Unclosed tags remain",
        };
        f.write_str(text)
    }
}

/// Everything a validation run reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub(super) diagnostics: Vec<Diagnostic>,
    pub(super) verdict: Verdict,
    pub(super) lines: usize,
}

impl Report {
    /// Returns the diagnostics in the order they were emitted.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the final verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the number of lines consumed.
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Returns `true` if the run ended with every element closed and no
    /// diagnostic of any kind.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.verdict == Verdict::WellFormed && self.diagnostics.is_empty()
    }

    /// Returns the human-readable output of the run, one message per line.
    ///
    /// This is every diagnostic followed, if the verdict is
    /// [`Verdict::WellFormed`], by the success message.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        let success = (self.verdict == Verdict::WellFormed).then(|| self.verdict.to_string());
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .chain(success)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(
        Diagnostic::UnexpectedClosingTag { line: 3, name: "a".into() },
        "Line 3: Unexpected closing tag </a>";
        "unexpected closing"
    )]
    #[test_case(
        Diagnostic::MismatchedTag { line: 1, found: "a".into(), expected: "b".into() },
        "Line 1: Mismatched tag </a>, expected </b>";
        "mismatched"
    )]
    #[test_case(
        Diagnostic::ContentAfterRoot { line: 7 },
        "Line 7: Content after root tag closed.";
        "content after root"
    )]
    #[test_case(Diagnostic::MissingRoot, "Missing root tag"; "missing root")]
    #[test_case(
        Diagnostic::UnclosedTag { name: "b".into() },
        "Unclosed tag: <b>";
        "unclosed"
    )]
    fn renders_message(diagnostic: Diagnostic, expected: &str) {
        assert_eq!(diagnostic.to_string(), expected);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let diagnostic = Diagnostic::MismatchedTag {
            line: 2,
            found: "x".into(),
            expected: "y".into(),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "mismatched_tag",
                "line": 2,
                "found": "x",
                "expected": "y",
            })
        );
    }

    #[test]
    fn success_message_follows_diagnostics() {
        let report = Report {
            diagnostics: vec![Diagnostic::ContentAfterRoot { line: 1 }],
            verdict: Verdict::WellFormed,
            lines: 1,
        };
        let messages: Vec<_> = report.messages().collect();
        assert_eq!(
            messages,
            vec![
                "Line 1: Content after root tag closed.".to_string(),
                "XML document is constructed correctly.".to_string(),
            ]
        );
        assert!(!report.is_clean());
    }
}
