//! Core step vocabulary, generation options, and errors for stepforge.
//!
//! This crate provides:
//! - [`StepKind`], [`PatternKind`], [`Keyword`] - The Given/When/Then vocabulary
//! - [`GenerationOptions`] - Output and execution target selection
//! - [`Error`] - Rich error types with context
//! - [`escape`] - Literal escaping shared by the formatter and generators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod escape;
pub mod kind;
pub mod options;

pub use error::{Error, ErrorContext, ErrorKind, OptionAxis};
pub use kind::{Keyword, PatternKind, StepKind};
pub use options::{ExecutionTarget, GenerationOptions, OutputTarget};

/// Result type alias using stepforge's Error.
pub type Result<T> = std::result::Result<T, Error>;
