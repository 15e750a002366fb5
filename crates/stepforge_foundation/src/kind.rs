//! The Given/When/Then step vocabulary.

use std::fmt;

/// The normalized kind of a step in a feature script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Precondition
    Given,
    /// Stimulus
    When,
    /// Expected outcome
    Then,
}

impl StepKind {
    /// All kinds in conventional order.
    pub const ALL: [StepKind; 3] = [StepKind::Given, StepKind::When, StepKind::Then];

    /// Returns the keyword as written in a feature script.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The role a registered pattern plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    /// Establishes a precondition
    Setup,
    /// Performs a stimulus
    Action,
    /// Checks an expected outcome
    Assertion,
}

impl PatternKind {
    /// The step kind this pattern conventionally belongs to.
    #[must_use]
    pub fn step_kind(self) -> StepKind {
        match self {
            Self::Setup => StepKind::Given,
            Self::Action => StepKind::When,
            Self::Assertion => StepKind::Then,
        }
    }

    /// Lowercase name used by introspection output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Action => "action",
            Self::Assertion => "assertion",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The literal keyword that introduced a step line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `Given`
    Given,
    /// `When`
    When,
    /// `Then`
    Then,
    /// `And`
    And,
    /// `But`
    But,
    /// `*` bullet
    Star,
}

impl Keyword {
    /// Parses a keyword token. Matching is case-sensitive, as in Gherkin.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "Given" => Some(Self::Given),
            "When" => Some(Self::When),
            "Then" => Some(Self::Then),
            "And" => Some(Self::And),
            "But" => Some(Self::But),
            "*" => Some(Self::Star),
            _ => None,
        }
    }

    /// Returns the step kind for primary keywords, `None` for conjunctions.
    #[must_use]
    pub fn primary_kind(self) -> Option<StepKind> {
        match self {
            Self::Given => Some(StepKind::Given),
            Self::When => Some(StepKind::When),
            Self::Then => Some(StepKind::Then),
            Self::And | Self::But | Self::Star => None,
        }
    }

    /// Returns true for `And`, `But`, and `*`.
    #[must_use]
    pub fn is_conjunction(self) -> bool {
        self.primary_kind().is_none()
    }

    /// The keyword as written.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Star => "*",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
