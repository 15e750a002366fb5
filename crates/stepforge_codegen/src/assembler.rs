//! Step definitions file assembly.
//!
//! Produces one complete artifact: a header with target-specific imports,
//! then every declaration in document order. Nothing is written to disk.

use std::collections::HashSet;
use std::fmt::Write;

use stepforge_foundation::escape::{escape_comment_text, js_string};
use stepforge_foundation::{ExecutionTarget, GenerationOptions, OutputTarget, StepKind};
use stepforge_gherkin::{ExtractedStep, ExtractorConfig, ScriptExtractor};
use stepforge_registry::PatternRegistry;

use crate::compiler::StepCompiler;
use crate::formatter::{INDENT, indent};

/// Configuration for file assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Emit all Given, then When, then Then declarations.
    /// Order within a group is preserved.
    pub group_by_kind: bool,
    /// Keep only the first declaration for identical step text.
    pub deduplicate: bool,
    /// Extraction settings.
    pub extractor: ExtractorConfig,
}

impl AssemblerConfig {
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

    /// Builder method to set extraction settings.
    #[must_use]
    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }
}

/// Assembles complete step definitions files.
#[derive(Clone, Copy, Debug)]
pub struct FileAssembler<'r> {
    compiler: StepCompiler<'r>,
    config: AssemblerConfig,
}

impl<'r> FileAssembler<'r> {
    /// Creates an assembler with the default configuration.
    #[must_use]
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self::with_config(registry, AssemblerConfig::default())
    }

    /// Creates an assembler with the given configuration.
    #[must_use]
    pub fn with_config(registry: &'r PatternRegistry, config: AssemblerConfig) -> Self {
        let compiler = StepCompiler::new(registry)
            .with_extractor(ScriptExtractor::with_config(config.extractor));
        Self { compiler, config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Builds the file for `script`.
    ///
    /// For [`OutputTarget::PlaywrightBdd`] each scenario becomes its own
    /// `test(...)` block and Background steps become `test.beforeEach`.
    /// Deduplication and grouping then apply within each block.
    #[must_use]
    pub fn assemble(&self, script: &str, filename: &str, options: &GenerationOptions) -> String {
        let extracted = self.compiler.extractor().extract_script(script);
        let mut out = header(filename, extracted.feature.as_deref(), options);

        if options.output_target == OutputTarget::PlaywrightBdd {
            let fallback = extracted.feature.as_deref().unwrap_or(filename);
            let blocks = test_blocks(extracted.steps);
            tracing::debug!(filename, blocks = blocks.len(), "assembling test blocks");

            for (i, block) in blocks.into_iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&block.opener(fallback));
                out.push('\n');
                for (j, step) in self.arrange(block.steps).iter().enumerate() {
                    if j > 0 {
                        out.push('\n');
                    }
                    out.push_str(&indent(&self.compiler.generate_step(step, options), INDENT));
                }
                out.push_str("});\n");
            }
            return out;
        }

        let steps = self.arrange(extracted.steps);
        let [(_, given), (_, when), (_, then)] = kind_counts(&steps);
        tracing::debug!(filename, given, when, then, "assembling step definitions");

        for step in &steps {
            out.push('\n');
            out.push_str(&self.compiler.generate_step(step, options));
            out.push('\n');
        }
        out
    }

    /// Applies deduplication and grouping.
    fn arrange(&self, steps: Vec<ExtractedStep>) -> Vec<ExtractedStep> {
        let mut steps = steps;
        if self.config.deduplicate {
            let mut seen = HashSet::new();
            steps.retain(|step| seen.insert(step.text.clone()));
        }
        if self.config.group_by_kind {
            // Stable sort keeps document order within each kind
            steps.sort_by_key(|step| step.kind);
        }
        steps
    }
}

/// Consecutive steps sharing a scenario, emitted as one test block.
#[derive(Debug)]
struct TestBlock {
    scenario: Option<String>,
    background: bool,
    steps: Vec<ExtractedStep>,
}

impl TestBlock {
    /// The opening line of the block.
    fn opener(&self, fallback: &str) -> String {
        if self.background {
            return "test.beforeEach(async ({ page }) => {".to_string();
        }
        let title = self.scenario.as_deref().unwrap_or(fallback);
        format!("test({}, async ({{ page }}) => {{", js_string(title))
    }
}

/// Splits steps into runs of the same scenario, in document order.
fn test_blocks(steps: Vec<ExtractedStep>) -> Vec<TestBlock> {
    let mut blocks: Vec<TestBlock> = Vec::new();
    for step in steps {
        match blocks.last_mut() {
            Some(block) if block.scenario == step.scenario && block.background == step.background => {
                block.steps.push(step);
            }
            _ => blocks.push(TestBlock {
                scenario: step.scenario.clone(),
                background: step.background,
                steps: vec![step],
            }),
        }
    }
    blocks
}

/// Import lines for a target combination, merged by module.
#[must_use]
pub fn imports(options: &GenerationOptions) -> Vec<(&'static str, Vec<&'static str>)> {
    let mut modules: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
    let mut add = |module: &'static str, names: &[&'static str]| {
        let existing = modules.iter().position(|(m, _)| *m == module);
        let index = match existing {
            Some(index) => index,
            None => {
                modules.push((module, Vec::new()));
                modules.len() - 1
            }
        };
        let entry = &mut modules[index].1;
        for name in names {
            if !entry.contains(name) {
                entry.push(*name);
            }
        }
    };

    match options.output_target {
        OutputTarget::Cucumber => add("@cucumber/cucumber", &["Given", "When", "Then"]),
        OutputTarget::PlaywrightBdd => add("@playwright/test", &["test"]),
        OutputTarget::Generic => {}
    }
    match options.execution_target {
        ExecutionTarget::Playwright => add("@playwright/test", &["expect"]),
        ExecutionTarget::ComponentMount => {
            add("@testing-library/vue", &["render", "screen", "fireEvent", "waitFor"]);
            add("vitest", &["expect", "vi"]);
            add("@/router", &["router"]);
            add("@/store", &["store"]);
        }
    }
    modules
}

/// The file header: provenance comment and import block.
#[must_use]
pub fn header(filename: &str, feature: Option<&str>, options: &GenerationOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Step definitions generated from {} by stepforge.",
        escape_comment_text(filename)
    );
    if let Some(feature) = feature {
        let _ = writeln!(out, "// Feature: {}", escape_comment_text(feature));
    }
    let _ = writeln!(
        out,
        "// Output target: {}. Execution target: {}.",
        options.output_target, options.execution_target
    );
    out.push_str("// Regenerate from the feature file instead of editing by hand.\n\n");

    for (module, names) in imports(options) {
        let _ = writeln!(out, "import {{ {} }} from '{module}';", names.join(", "));
    }
    out.push('\n');
    out
}

/// Counts declarations of each kind in an arranged step list.
#[must_use]
pub fn kind_counts(steps: &[ExtractedStep]) -> [(StepKind, usize); 3] {
    StepKind::ALL.map(|kind| (kind, steps.iter().filter(|s| s.kind == kind).count()))
}
