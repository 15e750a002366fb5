//! Error types for stepforge.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only registration and configuration can fail. Generating code for a step
//! never returns an error: an unmatched step becomes a generated placeholder
//! that fails when the emitted test runs.

use std::fmt;

use thiserror::Error;

/// The main error type for stepforge operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(
        key: impl Into<String>,
        source_text: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            key: key.into(),
            source_text: source_text.into(),
            message: message.into(),
        })
    }

    /// Creates a capture arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(key: impl Into<String>, declared: usize, groups: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            key: key.into(),
            declared,
            groups,
        })
    }

    /// Creates an error for an example sentence its own pattern rejects.
    #[must_use]
    pub fn example_mismatch(key: impl Into<String>, example: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExampleMismatch {
            key: key.into(),
            example: example.into(),
        })
    }

    /// Creates a duplicate key error.
    #[must_use]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateKey(key.into()))
    }

    /// Creates a pattern not found error.
    #[must_use]
    pub fn pattern_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::PatternNotFound(key.into()))
    }

    /// Creates an unknown option error.
    #[must_use]
    pub fn unknown_option(axis: OptionAxis, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOption {
            axis,
            value: value.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error is a registration-time defect.
    ///
    /// Registration defects abort initialization.
    #[must_use]
    pub fn is_registration_defect(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidPattern { .. }
                | ErrorKind::ArityMismatch { .. }
                | ErrorKind::ExampleMismatch { .. }
                | ErrorKind::DuplicateKey(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Pattern source is not a valid regular expression.
    #[error("invalid pattern for {key}: {message}")]
    InvalidPattern {
        /// The descriptor key.
        key: String,
        /// The rejected pattern source.
        source_text: String,
        /// Message from the regex compiler.
        message: String,
    },

    /// Declared generator arity disagrees with the pattern's capture groups.
    #[error("arity mismatch for {key}: generator reads {declared} captures, pattern has {groups}")]
    ArityMismatch {
        /// The descriptor key.
        key: String,
        /// Number of captures the generator declares.
        declared: usize,
        /// Number of capture groups in the pattern.
        groups: usize,
    },

    /// The descriptor's example sentence does not match its own pattern.
    #[error("example for {key} does not match its pattern: {example}")]
    ExampleMismatch {
        /// The descriptor key.
        key: String,
        /// The rejected example sentence.
        example: String,
    },

    /// A key was registered twice through the strict registration path.
    #[error("duplicate pattern key: {0}")]
    DuplicateKey(String),

    /// No descriptor is registered under the key.
    #[error("pattern not found: {0}")]
    PatternNotFound(String),

    /// An option value was not recognized at the API boundary.
    #[error("unknown {axis}: {value}")]
    UnknownOption {
        /// Which option axis was being parsed.
        axis: OptionAxis,
        /// The rejected value.
        value: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Option axes validated at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAxis {
    /// The template formatter's syntax family.
    OutputTarget,
    /// The code idiom generators emit.
    ExecutionTarget,
    /// How And/But steps pick their kind.
    ConjunctionPolicy,
}

impl fmt::Display for OptionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputTarget => write!(f, "output target"),
            Self::ExecutionTarget => write!(f, "execution target"),
            Self::ConjunctionPolicy => write!(f, "conjunction policy"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Generator module that was registering patterns.
    pub module: Option<String>,
    /// Feature file or configuration file.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the registering module.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(module) = &self.module {
            write!(f, "in module {module}")?;
        }
        if let Some(source) = &self.source {
            if self.module.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
