//! Pattern registry, step matcher, and pattern search for stepforge.
//!
//! # Architecture
//!
//! ```text
//! "I click the \"Submit\" button"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  insertion-ordered: key → descriptor + compiled regex
//! │ REGISTRY        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STEP            │  → first match wins: (interaction/click-button, ["Submit"])
//! │ MATCHER         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GENERATOR       │  → "await page.getByRole('button', { name: 'Submit' }).click();"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`descriptor`] - Pattern descriptors and the generator contract
//! - [`registry`] - Insertion-ordered pattern storage with eager validation
//! - [`matcher`] - First-match dispatch of step sentences
//! - [`search`] - Pattern listing and ranked search

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod matcher;
pub mod registry;
pub mod search;

// Re-export main types for convenience
pub use descriptor::{Captures, GenerateFn, PatternDescriptor, PatternMetadata};
pub use matcher::{StepMatch, StepMatcher};
pub use registry::{PatternRegistry, RegisteredPattern};
pub use search::{PatternSummary, RankedPatternSummary};
