//! The feature script line scanner.
//!
//! A single regular expression recognizes step lines. Everything else is
//! classified just enough to be skipped or attached:
//!
//! ```text
//! Feature: Login              header (title kept)
//!   @smoke                    tag, skipped
//!   Scenario: Valid user      header, resets conjunction kind
//!     Given a user exists     step
//!       | email   |           table row, attached to the step above
//!     And I log in            conjunction, inherits Given
//!       """json               doc string, attached to the step above
//!       {"ok": true}
//!       """
//!   Examples:                 header, following rows are data
//!     | a | b |
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use stepforge_foundation::{Error, Keyword, OptionAxis, StepKind};

use crate::step::{DataTable, DocString, ExtractedScript, ExtractedStep};

/// Matches a step line: leading keyword, then the sentence.
static STEP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(Given|When|Then|And|But|\*)\s+(\S.*?)\s*$").expect("step line regex")
});

/// Matches a structural header line.
static HEADER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(Feature|Rule|Background|Scenario Outline|Scenario Template|Scenario|Examples|Example|Scenarios)\s*:\s*(.*?)\s*$",
    )
    .expect("header line regex")
});

/// Doc string fences.
const FENCES: [&str; 2] = ["\"\"\"", "```"];

/// How `And`, `But`, and `*` steps choose their kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConjunctionPolicy {
    /// Inherit the most recent Given/When/Then in the same scenario.
    /// A conjunction with nothing to inherit is a Given.
    #[default]
    Inherit,
    /// Always `When`, for output compatible with older generated files.
    AlwaysWhen,
}

impl FromStr for ConjunctionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inherit" => Ok(Self::Inherit),
            "always-when" | "when" => Ok(Self::AlwaysWhen),
            _ => Err(Error::unknown_option(OptionAxis::ConjunctionPolicy, s)),
        }
    }
}

/// Configuration for extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Conjunction kind resolution.
    pub conjunctions: ConjunctionPolicy,
}

impl ExtractorConfig {
    /// Builder method to set the conjunction policy.
    #[must_use]
    pub fn with_conjunctions(mut self, policy: ConjunctionPolicy) -> Self {
        self.conjunctions = policy;
        self
    }
}

/// Splits a step line into its keyword and sentence.
///
/// Returns `None` for lines that are not steps.
#[must_use]
pub fn parse_step_line(line: &str) -> Option<(Keyword, String)> {
    let caps = STEP_LINE.captures(line)?;
    let keyword = Keyword::parse(caps.get(1)?.as_str())?;
    Some((keyword, caps.get(2)?.as_str().to_string()))
}

/// Extracts steps with the default configuration.
#[must_use]
pub fn extract(script: &str) -> Vec<ExtractedStep> {
    ScriptExtractor::new().extract(script)
}

/// Extracts the full script with the default configuration.
#[must_use]
pub fn extract_script(script: &str) -> ExtractedScript {
    ScriptExtractor::new().extract_script(script)
}

/// An open doc string.
struct OpenDocString {
    fence: &'static str,
    /// Line index of the opening fence
    start: usize,
    indent: usize,
    media_type: Option<String>,
    lines: Vec<String>,
}

/// Scanner state for one script.
#[derive(Default)]
struct ScanState {
    script: ExtractedScript,
    scenario: Option<String>,
    in_background: bool,
    last_primary: Option<StepKind>,
    in_examples: bool,
    /// Whether a table row or doc string would belong to the last step
    attach_to_last: bool,
}

/// Extracts steps from feature scripts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptExtractor {
    config: ExtractorConfig,
}

impl ScriptExtractor {
    /// Creates an extractor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with the given configuration.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Returns the steps in document order.
    #[must_use]
    pub fn extract(&self, script: &str) -> Vec<ExtractedStep> {
        self.extract_script(script).steps
    }

    /// Returns the feature title, steps, and outline example rows.
    ///
    /// Never fails: unrecognized lines are skipped, and an unclosed doc
    /// string fence is treated as a stray line so later steps survive.
    #[must_use]
    pub fn extract_script(&self, script: &str) -> ExtractedScript {
        let lines: Vec<&str> = script.lines().collect();
        let mut state = ScanState::default();
        let mut doc: Option<OpenDocString> = None;
        let mut i = 0;

        loop {
            if i >= lines.len() {
                match doc.take() {
                    Some(open) => {
                        tracing::warn!(line = open.start + 1, "unclosed doc string; rescanning after fence");
                        i = open.start + 1;
                        continue;
                    }
                    None => break,
                }
            }

            let line = lines[i];
            i += 1;

            if let Some(open) = doc.as_mut() {
                if line.trim_start().starts_with(open.fence) {
                    if let Some(closed) = doc.take() {
                        state.attach_doc_string(closed);
                    }
                } else {
                    open.lines.push(strip_indent(line, open.indent).to_string());
                }
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('@') {
                continue;
            }

            if let Some(fence) = FENCES.iter().copied().find(|f| trimmed.starts_with(*f)) {
                let media_type = trimmed[fence.len()..].trim();
                doc = Some(OpenDocString {
                    fence,
                    start: i - 1,
                    indent: line.chars().take_while(|c| c.is_whitespace()).count(),
                    media_type: (!media_type.is_empty()).then(|| media_type.to_string()),
                    lines: Vec::new(),
                });
            } else if trimmed.starts_with('|') {
                state.table_row(parse_row(trimmed));
            } else if let Some(caps) = HEADER_LINE.captures(line) {
                state.header(&caps[1], &caps[2]);
            } else if let Some((keyword, text)) = parse_step_line(line) {
                self.step(&mut state, keyword, text, trimmed, i);
            } else {
                // Free-form description text
                state.attach_to_last = false;
            }
        }

        state.script
    }

    fn step(
        &self,
        state: &mut ScanState,
        keyword: Keyword,
        text: String,
        original: &str,
        line: usize,
    ) {
        let kind = match keyword.primary_kind() {
            Some(kind) => {
                state.last_primary = Some(kind);
                kind
            }
            None => match self.config.conjunctions {
                ConjunctionPolicy::Inherit => state.last_primary.unwrap_or(StepKind::Given),
                ConjunctionPolicy::AlwaysWhen => StepKind::When,
            },
        };

        state.in_examples = false;
        state.attach_to_last = true;
        state.script.steps.push(ExtractedStep {
            kind,
            keyword,
            text,
            original: original.to_string(),
            line,
            scenario: state.scenario.clone(),
            background: state.in_background,
            doc_string: None,
            data_table: None,
        });
    }
}

impl ScanState {
    fn header(&mut self, keyword: &str, title: &str) {
        let title = (!title.is_empty()).then(|| title.to_string());
        self.attach_to_last = false;
        match keyword {
            "Feature" => {
                self.script.feature = title;
                self.last_primary = None;
            }
            "Examples" | "Scenarios" => {
                self.in_examples = true;
            }
            "Rule" => {
                self.last_primary = None;
                self.in_examples = false;
                self.in_background = false;
            }
            _ => {
                self.scenario = Some(title.unwrap_or_else(|| keyword.to_string()));
                self.in_background = keyword == "Background";
                self.last_primary = None;
                self.in_examples = false;
            }
        }
    }

    fn table_row(&mut self, cells: Vec<String>) {
        if self.in_examples {
            self.script.examples_rows.push(cells);
            return;
        }
        if !self.attach_to_last {
            return;
        }
        if let Some(step) = self.script.steps.last_mut() {
            step.data_table
                .get_or_insert_with(DataTable::default)
                .rows
                .push(cells);
        }
    }

    fn attach_doc_string(&mut self, open: OpenDocString) {
        if !self.attach_to_last || self.in_examples {
            return;
        }
        if let Some(step) = self.script.steps.last_mut() {
            step.doc_string = Some(DocString {
                media_type: open.media_type,
                content: open.lines.join("\n"),
            });
        }
    }
}

/// Removes up to `indent` leading whitespace characters.
fn strip_indent(line: &str, indent: usize) -> &str {
    let mut rest = line;
    for _ in 0..indent {
        match rest.chars().next() {
            Some(c) if c.is_whitespace() => rest = &rest[c.len_utf8()..],
            _ => break,
        }
    }
    rest
}

/// Splits a `| a | b |` row into trimmed cells, honoring `\|` escapes.
fn parse_row(row: &str) -> Vec<String> {
    let inner = row.strip_prefix('|').unwrap_or(row);
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('|') => current.push('|'),
                Some('n') => current.push('\n'),
                Some('\\') => current.push('\\'),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => current.push('\\'),
            },
            '|' => cells.push(std::mem::take(&mut current).trim().to_string()),
            c => current.push(c),
        }
    }

    // A row missing its closing pipe still keeps its last cell
    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }
    cells
}
