//! Command-line interface.
//!
//! ```text
//! stepforge generate login.feature -o login.steps.js
//! stepforge step 'When I click the "Submit" button'
//! stepforge list --json
//! stepforge search login
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use stepforge_codegen::{FileAssembler, StepCompiler};
use stepforge_foundation::{Error, ErrorContext, ExecutionTarget, OutputTarget, Result};
use stepforge_generators::standard_registry;
use stepforge_gherkin::ConjunctionPolicy;

use crate::config::StepforgeConfig;

/// Compile Given/When/Then step sentences into test code.
#[derive(Debug, Parser)]
#[command(name = "stepforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (default: ./stepforge.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Declaration syntax: cucumber, playwright-bdd, or generic
    #[arg(long, global = true)]
    pub output_target: Option<OutputTarget>,

    /// Test idiom: playwright or component-mount
    #[arg(long, global = true)]
    pub execution_target: Option<ExecutionTarget>,

    /// Conjunction handling: inherit or always-when
    #[arg(long, global = true)]
    pub conjunctions: Option<ConjunctionPolicy>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a step definitions file from a feature file
    Generate {
        /// Feature file to read
        feature: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Group declarations by kind
        #[arg(long)]
        group_by_kind: bool,

        /// Drop repeated step sentences
        #[arg(long)]
        deduplicate: bool,
    },

    /// Generate one step declaration
    Step {
        /// Step sentence, optionally starting with Given, When, or Then
        text: String,
    },

    /// List every registered pattern
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,

        /// Only patterns carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Rank patterns by relevance to a query
    Search {
        /// Free-text query
        query: String,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Resolves configuration: file values first, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file fails to load.
    pub fn resolve_config(&self) -> Result<StepforgeConfig> {
        let mut config = match &self.config {
            Some(path) => StepforgeConfig::load(path)?,
            None => StepforgeConfig::discover(Path::new("."))?,
        };
        if let Some(target) = self.output_target {
            config = config.with_output_target(target);
        }
        if let Some(target) = self.execution_target {
            config = config.with_execution_target(target);
        }
        if let Some(policy) = self.conjunctions {
            config = config.with_conjunctions(policy);
        }
        if let Command::Generate {
            group_by_kind,
            deduplicate,
            ..
        } = &self.command
        {
            config = config
                .with_group_by_kind(config.group_by_kind || *group_by_kind)
                .with_deduplicate(config.deduplicate || *deduplicate);
        }
        Ok(config)
    }
}

fn io_error(err: &std::io::Error, path: Option<&Path>) -> Error {
    let error = Error::io(err.to_string());
    match path {
        Some(path) => error.with_context(ErrorContext::new().with_source(path.display().to_string())),
        None => error,
    }
}

fn json_error(err: &serde_json::Error) -> Error {
    Error::io(err.to_string())
}

/// Runs a parsed command, writing results to `out`.
///
/// # Errors
///
/// Returns configuration, registration, and I/O failures. Unmatched steps
/// are not errors; they produce placeholder declarations.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.resolve_config()?;
    let registry = standard_registry()?;
    let options = config.generation_options();

    match &cli.command {
        Command::Generate { feature, output, .. } => {
            let script = fs::read_to_string(feature).map_err(|e| io_error(&e, Some(feature)))?;
            let filename = feature
                .file_name()
                .map_or_else(|| feature.display().to_string(), |n| n.to_string_lossy().into_owned());

            let generated =
                FileAssembler::with_config(&registry, config.assembler_config()).assemble(&script, &filename, &options);

            match output {
                Some(path) => {
                    fs::write(path, &generated).map_err(|e| io_error(&e, Some(path)))?;
                    tracing::info!(feature = %feature.display(), output = %path.display(), "wrote step definitions");
                }
                None => out.write_all(generated.as_bytes()).map_err(|e| io_error(&e, None))?,
            }
        }
        Command::Step { text } => {
            let declaration = StepCompiler::new(&registry).generate_step_definition(text, &options);
            writeln!(out, "{declaration}").map_err(|e| io_error(&e, None))?;
        }
        Command::List { json, tag } => {
            let summaries: Vec<_> = registry
                .list_patterns()
                .into_iter()
                .filter(|s| tag.as_deref().is_none_or(|t| s.tags.iter().any(|x| x.eq_ignore_ascii_case(t))))
                .collect();
            if *json {
                let text = serde_json::to_string_pretty(&summaries).map_err(|e| json_error(&e))?;
                writeln!(out, "{text}").map_err(|e| io_error(&e, None))?;
            } else {
                for summary in &summaries {
                    writeln!(
                        out,
                        "{:<34} {:<9} {}",
                        summary.key,
                        summary.kind.as_str(),
                        summary.description
                    )
                    .map_err(|e| io_error(&e, None))?;
                }
            }
        }
        Command::Search { query, json } => {
            let hits = registry.search(query);
            if *json {
                let text = serde_json::to_string_pretty(&hits).map_err(|e| json_error(&e))?;
                writeln!(out, "{text}").map_err(|e| io_error(&e, None))?;
            } else if hits.is_empty() {
                tracing::info!(query = %query, "no patterns matched query");
            } else {
                for hit in &hits {
                    writeln!(
                        out,
                        "{:>3}  {:<34} {}",
                        hit.score, hit.summary.key, hit.summary.description
                    )
                    .map_err(|e| io_error(&e, None))?;
                }
            }
        }
    }
    Ok(())
}
