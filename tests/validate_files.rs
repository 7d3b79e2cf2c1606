//! Validation of documents read from disk, on both stack backings.

#![allow(missing_docs)]

use std::{
    fs,
    io::{BufRead, BufReader},
    path::Path,
};

use nestcheck::{Diagnostic, DynamicArray, LinkedSequence, List, Report, TagName, Validator, Verdict};
use tempfile::TempDir;
use test_case::test_case;

fn validate_file<L: List<TagName>>(path: &Path, backing: L) -> Report {
    let reader = BufReader::new(fs::File::open(path).unwrap());
    let mut validator = Validator::with_backing(backing);
    for line in reader.lines() {
        validator.feed_line(&line.unwrap());
    }
    validator.finish()
}

fn write_document(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("document.xml");
    fs::write(&path, contents).unwrap();
    path
}

const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- a small catalog -->
<catalog>
    <book id="bk101">
        <author>Gambardella, Matthew</author>
        <title>XML Developer's Guide</title>
        <cover href="bk101.png"/>
    </book>
    <book id="bk102">
        <author>Ralls, Kim</author>
    </book>
</catalog>
"#;

#[test]
fn catalog_is_well_formed() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, CATALOG);

    let report = validate_file(&path, DynamicArray::new());

    assert!(report.is_clean());
    assert_eq!(report.lines(), 12);
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        vec!["XML document is constructed correctly."]
    );
}

#[test_case(
    "<catalog>\n<book>\n</catalog>\n",
    &["Line 3: Mismatched tag </catalog>, expected </book>", "Unclosed tag: <catalog>"];
    "closer skips one level"
)]
#[test_case(
    "<a>\n</a>\n<b>\n</b>\n",
    &["Line 3: Content after root tag closed.", "XML document is constructed correctly."];
    "two roots"
)]
#[test_case(
    "</a>\n",
    &["Line 1: Unexpected closing tag </a>", "Missing root tag"];
    "orphan closer"
)]
#[test_case(
    "<root>\n  <item\n    id=\"1\">\n  </item>\n</root>\n",
    &[
        "Line 4: Mismatched tag </item>, expected </root>",
        "Line 5: Unexpected closing tag </root>",
        "XML document is constructed correctly.",
    ];
    "multi-line opening tag is not joined"
)]
fn reports_anomalies_in_order(contents: &str, expected: &[&str]) {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, contents);

    for report in [
        validate_file(&path, DynamicArray::new()),
        validate_file(&path, LinkedSequence::new()),
    ] {
        assert_eq!(report.messages().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn deep_nesting_grows_the_array_backing() {
    let dir = TempDir::new().unwrap();
    let depth = 100;
    let mut contents = String::new();
    for level in 0..depth {
        contents.push_str(&format!("<n{level}>\n"));
    }
    for level in (1..depth).rev() {
        contents.push_str(&format!("</n{level}>\n"));
    }
    let path = write_document(&dir, &contents);

    let report = validate_file(&path, DynamicArray::with_capacity(2));

    assert_eq!(report.verdict(), Verdict::Unclosed);
    let unclosed = report
        .diagnostics()
        .iter()
        .filter(|d| matches!(d, Diagnostic::UnclosedTag { .. }))
        .count();
    assert_eq!(unclosed, 1);
    assert_eq!(
        report.diagnostics().last(),
        Some(&Diagnostic::UnclosedTag {
            name: TagName::from("n0")
        })
    );
}
