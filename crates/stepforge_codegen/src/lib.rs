//! Step formatting, dispatch, and file assembly for stepforge.
//!
//! # Architecture
//!
//! ```text
//! feature script
//!      │
//!      ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  EXTRACTOR   │ → │   COMPILER   │ → │  FORMATTER   │ → declaration
//! │  (gherkin)   │   │ match + body │   │ target syntax│
//! └──────────────┘   └──────────────┘   └──────────────┘
//!                                              │
//!                                              ▼
//!                                       ┌──────────────┐
//!                                       │  ASSEMBLER   │ → header + declarations
//!                                       └──────────────┘
//! ```
//!
//! Nothing here fails. A sentence no pattern matches becomes a placeholder
//! that throws when the generated test runs, and a generator defect is
//! contained to its own step.
//!
//! # Modules
//!
//! - [`formatter`] - Wraps bodies in target declaration syntax
//! - [`compiler`] - Dispatches sentences to generators with fallback
//! - [`assembler`] - Builds a complete step definitions file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod compiler;
pub mod formatter;

pub use assembler::{AssemblerConfig, FileAssembler};
pub use compiler::{FeatureSteps, GeneratedBody, StepCompiler};
pub use formatter::{ParsedDeclaration, format_step, read_declaration};

use stepforge_foundation::GenerationOptions;
use stepforge_registry::PatternRegistry;

/// Generates one wrapped step declaration.
#[must_use]
pub fn generate_step_definition(
    registry: &PatternRegistry,
    step_text: &str,
    options: &GenerationOptions,
) -> String {
    StepCompiler::new(registry).generate_step_definition(step_text, options)
}

/// Generates declarations for every step in a script, bucketed by kind.
#[must_use]
pub fn generate_feature_steps(
    registry: &PatternRegistry,
    script: &str,
    options: &GenerationOptions,
) -> FeatureSteps {
    StepCompiler::new(registry).generate_feature_steps(script, options)
}

/// Generates a complete step definitions file.
#[must_use]
pub fn generate_step_definitions_file(
    registry: &PatternRegistry,
    script: &str,
    filename: &str,
    options: &GenerationOptions,
) -> String {
    FileAssembler::new(registry).assemble(script, filename, options)
}
