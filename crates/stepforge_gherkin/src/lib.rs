//! Feature script step extraction for stepforge.
//!
//! Scans a Given/When/Then document line by line and yields its steps in
//! document order. Headers, tags, comments, descriptions, and outline
//! example tables are skipped. Doc strings and data tables attach to the
//! step they follow.
//!
//! # Modules
//!
//! - [`step`] - Extracted steps and their attached arguments
//! - [`extractor`] - The line scanner and conjunction handling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extractor;
pub mod step;

pub use extractor::{ConjunctionPolicy, ExtractorConfig, ScriptExtractor, extract, extract_script, parse_step_line};
pub use step::{DataTable, DocString, ExtractedScript, ExtractedStep};
