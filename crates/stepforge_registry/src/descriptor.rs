//! Pattern descriptors.
//!
//! A descriptor pairs one phrasing family (a case-insensitive regular
//! expression) with the generator that turns its captures into code.

use std::cell::Cell;

use stepforge_foundation::{GenerationOptions, PatternKind};

/// Generator contract: positional captures in, implementation body out.
///
/// Generators are pure. They return only the body, never a header or the
/// surrounding declaration.
pub type GenerateFn = fn(&Captures, &GenerationOptions) -> String;

/// Human-facing metadata used by introspection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternMetadata {
    /// One-line summary
    pub description: String,
    /// A sentence the pattern must match, checked at registration
    pub example: Option<String>,
}

/// A data record for one recognized phrasing.
#[derive(Clone, Debug)]
pub struct PatternDescriptor {
    /// Regular-expression source, compiled case-insensitively
    pub pattern: String,
    /// Setup, action, or assertion
    pub kind: PatternKind,
    /// Number of captures the generator reads
    pub arity: usize,
    /// Produces the implementation body
    pub generate: GenerateFn,
    /// Free-text labels for categorization and search
    pub tags: Vec<String>,
    /// Description and example
    pub metadata: PatternMetadata,
}

impl PatternDescriptor {
    /// Creates a descriptor with no captures, tags, or metadata.
    #[must_use]
    pub fn new(kind: PatternKind, pattern: impl Into<String>, generate: GenerateFn) -> Self {
        Self {
            pattern: pattern.into(),
            kind,
            arity: 0,
            generate,
            tags: Vec::new(),
            metadata: PatternMetadata::default(),
        }
    }

    /// Shorthand for a [`PatternKind::Setup`] descriptor.
    #[must_use]
    pub fn setup(pattern: impl Into<String>, generate: GenerateFn) -> Self {
        Self::new(PatternKind::Setup, pattern, generate)
    }

    /// Shorthand for a [`PatternKind::Action`] descriptor.
    #[must_use]
    pub fn action(pattern: impl Into<String>, generate: GenerateFn) -> Self {
        Self::new(PatternKind::Action, pattern, generate)
    }

    /// Shorthand for a [`PatternKind::Assertion`] descriptor.
    #[must_use]
    pub fn assertion(pattern: impl Into<String>, generate: GenerateFn) -> Self {
        Self::new(PatternKind::Assertion, pattern, generate)
    }

    /// Declares how many captures the generator reads.
    #[must_use]
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Adds tags, skipping duplicates.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    /// Sets the one-line description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    /// Sets the example sentence.
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.metadata.example = Some(example.into());
        self
    }

    /// Returns true if the descriptor carries the tag (case-insensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Positional captures handed to a generator.
///
/// Group 0 (the whole match) is not included. Optional groups that did not
/// participate read as empty strings. Reads past the end are recorded so
/// tests can detect a generator that disagrees with its pattern.
#[derive(Debug, Default)]
pub struct Captures {
    values: Vec<Option<String>>,
    overread: Cell<bool>,
}

impl Captures {
    /// Creates captures from explicit values.
    #[must_use]
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self {
            values,
            overread: Cell::new(false),
        }
    }

    /// Creates captures where every group participated.
    #[must_use]
    pub fn from_strs(values: &[&str]) -> Self {
        Self::new(values.iter().map(|v| Some((*v).to_string())).collect())
    }

    /// Collects groups 1.. from a regex match.
    #[must_use]
    pub fn from_regex(caps: &regex::Captures<'_>) -> Self {
        Self::new(
            caps.iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect(),
        )
    }

    /// Number of capture groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the pattern has no capture groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the group's text, or `None` if it did not participate.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        match self.values.get(index) {
            Some(value) => value.as_deref(),
            None => {
                self.overread.set(true);
                None
            }
        }
    }

    /// Returns the group's text, or `""` if it did not participate.
    #[must_use]
    pub fn arg(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }

    /// Returns true if the optional group participated in the match.
    #[must_use]
    pub fn present(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// True if a generator read an index the pattern cannot produce.
    #[must_use]
    pub fn overread(&self) -> bool {
        self.overread.get()
    }

    /// Iterates over the groups in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.values.iter().map(Option::as_deref)
    }
}

impl Clone for Captures {
    fn clone(&self) -> Self {
        Self::new(self.values.clone())
    }
}
