//! Extracted steps.

use stepforge_foundation::{Keyword, StepKind};

/// A multi-line string argument attached to a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocString {
    /// Media type after the opening fence, e.g. `json`
    pub media_type: Option<String>,
    /// Content lines with the fence's indentation removed
    pub content: String,
}

/// A table argument attached to a step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTable {
    /// Rows of trimmed cells
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// The first row, conventionally the header.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Number of rows including the header.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One step sentence pulled from a feature script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedStep {
    /// Normalized kind; conjunctions resolved
    pub kind: StepKind,
    /// The keyword as written
    pub keyword: Keyword,
    /// Sentence with the keyword stripped, trimmed
    pub text: String,
    /// The full source line, trimmed
    pub original: String,
    /// 1-based line number
    pub line: usize,
    /// Title of the enclosing scenario or background
    pub scenario: Option<String>,
    /// Declared under a `Background:` header
    pub background: bool,
    /// Attached doc string
    pub doc_string: Option<DocString>,
    /// Attached data table
    pub data_table: Option<DataTable>,
}

impl ExtractedStep {
    /// Creates a step with no scenario or arguments.
    #[must_use]
    pub fn new(kind: StepKind, keyword: Keyword, text: impl Into<String>, line: usize) -> Self {
        let text = text.into();
        Self {
            kind,
            keyword,
            original: format!("{keyword} {text}"),
            text,
            line,
            scenario: None,
            background: false,
            doc_string: None,
            data_table: None,
        }
    }
}

/// Everything extracted from one feature script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedScript {
    /// Title from the `Feature:` header
    pub feature: Option<String>,
    /// Steps in document order
    pub steps: Vec<ExtractedStep>,
    /// Rows from scenario outline `Examples:` tables, header included
    pub examples_rows: Vec<Vec<String>>,
}
