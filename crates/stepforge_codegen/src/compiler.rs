//! Step compilation.
//!
//! Resolves a sentence against the registry, runs the matched generator,
//! and formats the result. Every sentence produces a declaration: unmatched
//! text and generator defects become placeholders that throw at test time.

use std::panic::{AssertUnwindSafe, catch_unwind};

use stepforge_foundation::escape::{escape_comment_text, js_string};
use stepforge_foundation::{GenerationOptions, StepKind};
use stepforge_gherkin::{ExtractedStep, ScriptExtractor, parse_step_line};
use stepforge_registry::{PatternRegistry, StepMatch, StepMatcher};

use crate::formatter::format_step;

/// An implementation body and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedBody {
    /// The body text
    pub body: String,
    /// Key of the pattern that produced it; `None` for placeholders
    pub key: Option<String>,
    /// Kind of the matched pattern
    pub kind: Option<StepKind>,
}

impl GeneratedBody {
    /// Returns true if no pattern produced the body.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.key.is_none()
    }
}

/// Declarations for a script, bucketed by step kind in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSteps {
    /// Given declarations
    pub given: Vec<String>,
    /// When declarations
    pub when: Vec<String>,
    /// Then declarations
    pub then: Vec<String>,
}

impl FeatureSteps {
    /// The bucket for a kind.
    #[must_use]
    pub fn get(&self, kind: StepKind) -> &[String] {
        match kind {
            StepKind::Given => &self.given,
            StepKind::When => &self.when,
            StepKind::Then => &self.then,
        }
    }

    fn push(&mut self, kind: StepKind, declaration: String) {
        match kind {
            StepKind::Given => self.given.push(declaration),
            StepKind::When => self.when.push(declaration),
            StepKind::Then => self.then.push(declaration),
        }
    }

    /// Total number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.given.len() + self.when.len() + self.then.len()
    }

    /// Returns true if there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Placeholder body for a sentence no pattern matches.
#[must_use]
pub fn unmatched_body(step_text: &str) -> String {
    format!(
        "// No step pattern matched: {}\nthrow new Error({});",
        escape_comment_text(step_text),
        js_string(&format!("Step not implemented: {step_text}"))
    )
}

/// Placeholder body for a generator that panicked or produced nothing.
#[must_use]
pub fn failed_body(key: &str, step_text: &str, reason: &str) -> String {
    format!(
        "// Generator {key} failed: {}\nthrow new Error({});",
        escape_comment_text(reason),
        js_string(&format!("Step generation failed: {step_text}"))
    )
}

/// Compiles step sentences against a borrowed registry.
#[derive(Clone, Copy, Debug)]
pub struct StepCompiler<'r> {
    registry: &'r PatternRegistry,
    extractor: ScriptExtractor,
}

impl<'r> StepCompiler<'r> {
    /// Creates a compiler over the given registry.
    #[must_use]
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self {
            registry,
            extractor: ScriptExtractor::new(),
        }
    }

    /// Uses the given extractor for whole scripts.
    #[must_use]
    pub fn with_extractor(mut self, extractor: ScriptExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The registry patterns are resolved against.
    #[must_use]
    pub fn registry(&self) -> &'r PatternRegistry {
        self.registry
    }

    /// The extractor used for whole scripts.
    #[must_use]
    pub fn extractor(&self) -> &ScriptExtractor {
        &self.extractor
    }

    /// Resolves a sentence and produces its body, with fallback.
    #[must_use]
    pub fn generate_body(&self, step_text: &str, options: &GenerationOptions) -> GeneratedBody {
        match StepMatcher::new(self.registry).resolve(step_text) {
            Some(m) => Self::run_generator(&m, step_text, options),
            None => {
                tracing::info!(step = step_text, "generating placeholder for unmatched step");
                GeneratedBody {
                    body: unmatched_body(step_text),
                    key: None,
                    kind: None,
                }
            }
        }
    }

    /// Runs a matched generator, containing panics and empty output.
    fn run_generator(m: &StepMatch<'_>, step_text: &str, options: &GenerationOptions) -> GeneratedBody {
        let key = m.key().to_string();
        let kind = Some(m.pattern.kind().step_kind());

        let body = match catch_unwind(AssertUnwindSafe(|| m.generate(options))) {
            Ok(body) if !body.trim().is_empty() => body,
            Ok(_) => {
                tracing::error!(key = %key, step = step_text, "generator produced an empty body");
                failed_body(&key, step_text, "empty body")
            }
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic".to_string());
                tracing::error!(key = %key, step = step_text, %reason, "generator panicked");
                failed_body(&key, step_text, &reason)
            }
        };

        GeneratedBody {
            body,
            key: Some(key),
            kind,
        }
    }

    /// Generates one wrapped declaration for free text.
    ///
    /// A leading Given/When/Then keyword is stripped and used as the kind.
    /// Otherwise the matched pattern's kind is used, and unmatched text
    /// without a keyword is declared as Given.
    #[must_use]
    pub fn generate_step_definition(&self, step_text: &str, options: &GenerationOptions) -> String {
        let (keyword_kind, text) = match parse_step_line(step_text) {
            Some((keyword, text)) => (keyword.primary_kind(), text),
            None => (None, step_text.trim().to_string()),
        };
        let generated = self.generate_body(&text, options);
        let kind = keyword_kind
            .or(generated.kind)
            .unwrap_or(StepKind::Given);
        format_step(&generated.body, kind, &text, options.output_target)
    }

    /// Generates the declaration for an extracted step.
    ///
    /// Attached doc strings and data tables are kept as leading comments.
    #[must_use]
    pub fn generate_step(&self, step: &ExtractedStep, options: &GenerationOptions) -> String {
        let generated = self.generate_body(&step.text, options);
        let mut body = step_context(step);
        body.push_str(&generated.body);
        format_step(&body, step.kind, &step.text, options.output_target)
    }

    /// Generates declarations for every step in a script, by kind.
    #[must_use]
    pub fn generate_feature_steps(&self, script: &str, options: &GenerationOptions) -> FeatureSteps {
        let mut steps = FeatureSteps::default();
        for step in self.extractor.extract(script) {
            steps.push(step.kind, self.generate_step(&step, options));
        }
        steps
    }
}

/// Renders a step's source line and attached arguments as comments.
fn step_context(step: &ExtractedStep) -> String {
    let mut out = String::new();
    if let Some(doc) = &step.doc_string {
        match &doc.media_type {
            Some(media) => out.push_str(&format!("// Doc string ({media}):\n")),
            None => out.push_str("// Doc string:\n"),
        }
        for line in doc.content.lines() {
            out.push_str("//   ");
            out.push_str(&escape_comment_text(line));
            out.push('\n');
        }
    }
    if let Some(table) = &step.data_table {
        out.push_str("// Data table:\n");
        for row in &table.rows {
            let cells: Vec<_> = row.iter().map(|c| escape_comment_text(c)).collect();
            out.push_str(&format!("//   | {} |\n", cells.join(" | ")));
        }
    }
    out
}
