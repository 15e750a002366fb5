//! Pattern listing and ranked search.
//!
//! Relevance is additive across independent match types:
//! pattern source ([`PATTERN_WEIGHT`]), any tag ([`TAG_WEIGHT`]), and
//! description ([`DESCRIPTION_WEIGHT`]). Ties keep registry order.

use stepforge_foundation::PatternKind;

use crate::registry::{PatternRegistry, RegisteredPattern};

/// Score for a query found in the pattern source.
pub const PATTERN_WEIGHT: u32 = 10;
/// Score for a query found in at least one tag.
pub const TAG_WEIGHT: u32 = 5;
/// Score for a query found in the description.
pub const DESCRIPTION_WEIGHT: u32 = 3;

/// A registered pattern as exposed to tooling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PatternSummary {
    /// Registration key
    pub key: String,
    /// Regular-expression source
    pub pattern: String,
    /// Pattern kind
    pub kind: PatternKind,
    /// Tags
    pub tags: Vec<String>,
    /// One-line description
    pub description: String,
    /// Example sentence, if any
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub example: Option<String>,
}

impl From<&RegisteredPattern> for PatternSummary {
    fn from(entry: &RegisteredPattern) -> Self {
        let descriptor = entry.descriptor();
        Self {
            key: entry.key().to_string(),
            pattern: descriptor.pattern.clone(),
            kind: descriptor.kind,
            tags: descriptor.tags.clone(),
            description: descriptor.metadata.description.clone(),
            example: descriptor.metadata.example.clone(),
        }
    }
}

/// A search hit with its relevance score.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedPatternSummary {
    /// The matching pattern
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub summary: PatternSummary,
    /// Weighted relevance
    pub score: u32,
}

/// Lists every registered pattern in registry order.
#[must_use]
pub fn list_patterns(registry: &PatternRegistry) -> Vec<PatternSummary> {
    registry.all().iter().map(PatternSummary::from).collect()
}

/// Scores one pattern against a lowercase query.
#[must_use]
pub fn score(entry: &RegisteredPattern, query: &str) -> u32 {
    let descriptor = entry.descriptor();
    let mut total = 0;
    if descriptor.pattern.to_lowercase().contains(query) {
        total += PATTERN_WEIGHT;
    }
    if descriptor
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(query))
    {
        total += TAG_WEIGHT;
    }
    if descriptor.metadata.description.to_lowercase().contains(query) {
        total += DESCRIPTION_WEIGHT;
    }
    total
}

/// Ranks patterns against a free-text query.
///
/// Matching is case-insensitive substring search. Patterns scoring zero are
/// omitted; a blank query returns nothing.
#[must_use]
pub fn search(registry: &PatternRegistry, query: &str) -> Vec<RankedPatternSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<RankedPatternSummary> = registry
        .all()
        .iter()
        .filter_map(|entry| {
            let score = score(entry, &query);
            (score > 0).then(|| RankedPatternSummary {
                summary: PatternSummary::from(entry),
                score,
            })
        })
        .collect();

    // Stable sort keeps registry order among equal scores
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

impl PatternRegistry {
    /// Lists every registered pattern in registry order.
    #[must_use]
    pub fn list_patterns(&self) -> Vec<PatternSummary> {
        list_patterns(self)
    }

    /// Ranks patterns against a free-text query.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<RankedPatternSummary> {
        search(self, query)
    }
}
