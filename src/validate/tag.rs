use std::{fmt, ops::Deref};

use serde::Serialize;

/// The name of an element, as written between the angle brackets.
///
/// Names are taken verbatim; no case folding or character validation is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    /// Creates a tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for TagName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A classified `<...>` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `<?...>`
    ProcessingInstruction,
    /// `<!--...>`
    Comment,
    /// `<.../>`
    SelfClosing,
    /// `</name>`
    Closing(&'a str),
    /// `<name attr="...">`; attributes are discarded.
    Opening(&'a str),
}

impl<'a> Tag<'a> {
    /// Classifies the text between `<` and `>`.
    ///
    /// The checks are ordered: a span such as `</br/>` is self-closing, not a
    /// closing tag.
    #[must_use]
    pub fn classify(inner: &'a str) -> Self {
        let inner = inner.trim();
        if inner.starts_with('?') {
            Self::ProcessingInstruction
        } else if inner.starts_with("!--") {
            Self::Comment
        } else if inner.ends_with('/') {
            Self::SelfClosing
        } else if let Some(name) = inner.strip_prefix('/') {
            Self::Closing(name)
        } else {
            Self::Opening(inner.split_whitespace().next().unwrap_or_default())
        }
    }
}

/// Returns the tags on `line`, left to right.
///
/// A `<` with no `>` after it on the same line ends the scan; tags never
/// continue onto the next line.
#[must_use]
pub fn scan(line: &str) -> Scan<'_> {
    Scan { rest: line }
}

/// Iterator returned by [`scan`].
#[derive(Debug, Clone)]
pub struct Scan<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Scan<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let open = self.rest.find('<')?;
        let after_open = &self.rest[open + 1..];
        let Some(close) = after_open.find('>') else {
            self.rest = "";
            return None;
        };

        self.rest = &after_open[close + 1..];
        Some(Tag::classify(&after_open[..close]))
    }
}
