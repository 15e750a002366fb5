//! Step sentence matching.
//!
//! Patterns are searched for anywhere in the sentence, not anchored to the
//! whole string, so optional leading and trailing words still match. The
//! first pattern in registry order that matches wins.

use stepforge_foundation::GenerationOptions;

use crate::descriptor::Captures;
use crate::registry::{PatternRegistry, RegisteredPattern};

/// A successful match of a sentence against a registered pattern.
#[derive(Clone, Debug)]
pub struct StepMatch<'r> {
    /// The pattern that matched
    pub pattern: &'r RegisteredPattern,
    /// Its positional captures
    pub captures: Captures,
}

impl StepMatch<'_> {
    /// The key of the matched pattern.
    #[must_use]
    pub fn key(&self) -> &str {
        self.pattern.key()
    }

    /// Runs the pattern's generator over the captures.
    #[must_use]
    pub fn generate(&self, options: &GenerationOptions) -> String {
        (self.pattern.descriptor().generate)(&self.captures, options)
    }
}

/// Matches step sentences against a registry.
#[derive(Clone, Copy, Debug)]
pub struct StepMatcher<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> StepMatcher<'r> {
    /// Creates a matcher over the given registry.
    #[must_use]
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }

    /// Finds the first pattern, in insertion order, matching the sentence.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<StepMatch<'r>> {
        let text = text.trim();
        let found = self
            .registry
            .all()
            .iter()
            .find_map(|pattern| Self::try_match(pattern, text));

        match &found {
            Some(m) => tracing::trace!(key = m.key(), step = text, "matched step"),
            None => tracing::debug!(step = text, "no pattern matched step"),
        }
        found
    }

    /// Returns every matching pattern in priority order.
    ///
    /// Useful for reporting overlapping phrasings; generation only ever uses
    /// the first.
    #[must_use]
    pub fn resolve_all(&self, text: &str) -> Vec<StepMatch<'r>> {
        let text = text.trim();
        self.registry
            .all()
            .iter()
            .filter_map(|pattern| Self::try_match(pattern, text))
            .collect()
    }

    /// Tries a single pattern.
    fn try_match(pattern: &'r RegisteredPattern, text: &str) -> Option<StepMatch<'r>> {
        pattern.regex().captures(text).map(|caps| StepMatch {
            pattern,
            captures: Captures::from_regex(&caps),
        })
    }
}
