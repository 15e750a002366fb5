//! Project configuration.
//!
//! ```toml
//! output-target = "cucumber"
//! execution-target = "component-mount"
//! group-by-kind = true
//! deduplicate = true
//! conjunctions = "inherit"
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stepforge_codegen::AssemblerConfig;
use stepforge_foundation::{Error, ErrorContext, ExecutionTarget, GenerationOptions, OutputTarget, Result};
use stepforge_gherkin::{ConjunctionPolicy, ExtractorConfig};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "stepforge.toml";

/// Settings for a stepforge project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct StepforgeConfig {
    /// Declaration syntax of generated files
    pub output_target: OutputTarget,
    /// Test idiom of generated bodies
    pub execution_target: ExecutionTarget,
    /// Group declarations by kind in assembled files
    pub group_by_kind: bool,
    /// Drop repeated step sentences in assembled files
    pub deduplicate: bool,
    /// How conjunction steps choose their kind
    pub conjunctions: ConjunctionPolicy,
}

impl StepforgeConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`stepforge_foundation::ErrorKind::Config`] for malformed TOML,
    /// unknown keys, or unknown option values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, ErrorContext::new())
    }

    /// Parses TOML, recording the offending line in `context`.
    fn parse(text: &str, context: ErrorContext) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            let context = match e.span() {
                Some(span) => context.with_line(line_of(text, span.start)),
                None => context,
            };
            Error::config(e.message().to_string()).with_context(context)
        })
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if it does not parse. Either carries the path as context.
    pub fn load(path: &Path) -> Result<Self> {
        let context = ErrorContext::new().with_source(path.display().to_string());
        let text = fs::read_to_string(path).map_err(|e| Error::io(e.to_string()).with_context(context.clone()))?;
        let config = Self::parse(&text, context)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Loads `stepforge.toml` from `dir` if present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists and fails to load.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Builder method to set the output target.
    #[must_use]
    pub fn with_output_target(mut self, target: OutputTarget) -> Self {
        self.output_target = target;
        self
    }

    /// Builder method to set the execution target.
    #[must_use]
    pub fn with_execution_target(mut self, target: ExecutionTarget) -> Self {
        self.execution_target = target;
        self
    }

    /// Builder method to enable grouping by kind.
    #[must_use]
    pub fn with_group_by_kind(mut self, group: bool) -> Self {
        self.group_by_kind = group;
        self
    }

    /// Builder method to enable deduplication.
    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Builder method to set the conjunction policy.
    #[must_use]
    pub fn with_conjunctions(mut self, policy: ConjunctionPolicy) -> Self {
        self.conjunctions = policy;
        self
    }

    /// The generation options this configuration selects.
    #[must_use]
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::new()
            .with_output_target(self.output_target)
            .with_execution_target(self.execution_target)
    }

    /// The assembler settings this configuration selects.
    #[must_use]
    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig::default()
            .with_group_by_kind(self.group_by_kind)
            .with_deduplicate(self.deduplicate)
            .with_extractor(ExtractorConfig::default().with_conjunctions(self.conjunctions))
    }
}

/// 1-based line containing byte `offset`.
fn line_of(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.bytes().take(end).filter(|&b| b == b'\n').count() + 1
}
