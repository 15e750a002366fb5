//! Registry for pattern descriptors.
//!
//! Stores descriptors by key in insertion order. Insertion order is match
//! priority: when a sentence matches several patterns, the one registered
//! first wins.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use stepforge_foundation::{Error, PatternKind, Result};

use crate::descriptor::PatternDescriptor;
use crate::matcher::{StepMatch, StepMatcher};

// =============================================================================
// RegisteredPattern
// =============================================================================

/// A descriptor stored under its key, with its compiled pattern.
#[derive(Clone, Debug)]
pub struct RegisteredPattern {
    key: String,
    descriptor: PatternDescriptor,
    regex: Regex,
}

impl RegisteredPattern {
    /// Compiles and validates a descriptor.
    ///
    /// # Errors
    ///
    /// - [`stepforge_foundation::ErrorKind::InvalidPattern`] if the source does not compile
    /// - [`stepforge_foundation::ErrorKind::ArityMismatch`] if the declared arity differs
    ///   from the pattern's capture group count
    /// - [`stepforge_foundation::ErrorKind::ExampleMismatch`] if the example sentence
    ///   does not match
    pub fn compile(key: impl Into<String>, descriptor: PatternDescriptor) -> Result<Self> {
        let key = key.into();
        let regex = RegexBuilder::new(&descriptor.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid_pattern(&key, &descriptor.pattern, e.to_string()))?;

        let groups = regex.captures_len() - 1;
        if groups != descriptor.arity {
            return Err(Error::arity_mismatch(&key, descriptor.arity, groups));
        }

        if let Some(example) = &descriptor.metadata.example {
            if !regex.is_match(example) {
                return Err(Error::example_mismatch(&key, example));
            }
        }

        Ok(Self {
            key,
            descriptor,
            regex,
        })
    }

    /// The registration key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &PatternDescriptor {
        &self.descriptor
    }

    /// The compiled, case-insensitive pattern.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The pattern kind.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        self.descriptor.kind
    }
}

// =============================================================================
// PatternRegistry
// =============================================================================

/// Insertion-ordered mapping from key to descriptor.
///
/// Built once by application wiring, then shared by reference with the
/// matcher, the code generator, and introspection.
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    /// Entries in insertion order.
    entries: Vec<RegisteredPattern>,
    /// Map from key to position in `entries`.
    index: HashMap<String, usize>,
}

impl PatternRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under `key`.
    ///
    /// Re-registering an existing key replaces the descriptor in place; its
    /// match priority does not move. The replaced descriptor is returned.
    ///
    /// # Errors
    ///
    /// Returns a registration defect if the descriptor fails validation
    /// (see [`RegisteredPattern::compile`]). The registry is unchanged.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        descriptor: PatternDescriptor,
    ) -> Result<Option<PatternDescriptor>> {
        let entry = RegisteredPattern::compile(key, descriptor)?;

        if let Some(&position) = self.index.get(&entry.key) {
            tracing::warn!(key = %entry.key, position, "replacing registered step pattern");
            let previous = std::mem::replace(&mut self.entries[position], entry);
            return Ok(Some(previous.descriptor));
        }

        tracing::debug!(key = %entry.key, pattern = %entry.descriptor.pattern, "registered step pattern");
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(None)
    }

    /// Registers a descriptor, refusing to replace an existing key.
    ///
    /// # Errors
    ///
    /// Returns [`stepforge_foundation::ErrorKind::DuplicateKey`] if the key is
    /// taken, or a validation error from [`RegisteredPattern::compile`].
    pub fn register_unique(
        &mut self,
        key: impl Into<String>,
        descriptor: PatternDescriptor,
    ) -> Result<()> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(Error::duplicate_key(key));
        }
        self.register(key, descriptor).map(|_| ())
    }

    /// Looks up a pattern by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RegisteredPattern> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Looks up a pattern by key, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns [`stepforge_foundation::ErrorKind::PatternNotFound`].
    pub fn try_get(&self, key: &str) -> Result<&RegisteredPattern> {
        self.get(key).ok_or_else(|| Error::pattern_not_found(key))
    }

    /// Checks if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All patterns in insertion (priority) order.
    #[must_use]
    pub fn all(&self) -> &[RegisteredPattern] {
        &self.entries
    }

    /// All keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(RegisteredPattern::key).collect()
    }

    /// Position of a key in priority order.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Patterns of one kind, in insertion order.
    #[must_use]
    pub fn by_kind(&self, kind: PatternKind) -> Vec<&RegisteredPattern> {
        self.entries.iter().filter(|e| e.kind() == kind).collect()
    }

    /// Patterns carrying a tag, in insertion order.
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<&RegisteredPattern> {
        self.entries
            .iter()
            .filter(|e| e.descriptor.has_tag(tag))
            .collect()
    }

    /// Returns the number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no patterns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a step sentence to its first matching pattern.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<StepMatch<'_>> {
        StepMatcher::new(self).resolve(text)
    }
}

// =============================================================================
// Tests
// =============================================================================
