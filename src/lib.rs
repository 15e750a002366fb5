//! stepforge - Compile Given/When/Then step sentences into test code
//!
//! This crate re-exports all layers of stepforge for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: stepforge_runtime     — Configuration, logging, CLI
//! Layer 3: stepforge_generators  — Standard generator modules
//! Layer 2: stepforge_codegen     — Formatter, step compiler, file assembler
//! Layer 1: stepforge_registry    — Pattern registry, matcher, search
//!          stepforge_gherkin     — Feature script extraction
//! Layer 0: stepforge_foundation  — Step kinds, options, errors, escaping
//! ```

pub use stepforge_codegen as codegen;
pub use stepforge_foundation as foundation;
pub use stepforge_generators as generators;
pub use stepforge_gherkin as gherkin;
pub use stepforge_registry as registry;
pub use stepforge_runtime as runtime;
