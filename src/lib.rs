//! Generic list and stack collections, and a tag nesting checker built on them.
//!
//! The [`collections`] module provides two interchangeable [`List`]
//! back-ends and a LIFO [`Stack`] facade over either. The [`validate`]
//! module drives a stack of tag names over lines of text and reports
//! nesting anomalies as [`Diagnostic`]s.

pub mod collections;
pub use collections::{DynamicArray, Error, LinkedSequence, List, Stack};

/// Validator configuration.
pub mod config;
pub use config::{Backend, Config};

pub mod validate;
pub use validate::{Diagnostic, Report, TagName, Validator, Verdict, validate_lines};
