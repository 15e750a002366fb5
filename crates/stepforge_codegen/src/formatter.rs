//! Template formatting.
//!
//! Wraps a generator's body in the declaration syntax of an output target.
//! Formatting is a pure string transform: the body is only indented.
//!
//! ```text
//! Cucumber        Given(/^a user exists$/, async function () { ... });
//! PlaywrightBdd   await test.step("Given a user exists", async () => { ... });
//! Generic         // Given a user exists
//!                 { ... }
//! ```

use std::fmt::Write;

use stepforge_foundation::escape::{
    escape_comment_text, escape_regex_literal, escape_string_literal, unescape_regex_literal,
    unescape_string_literal,
};
use stepforge_foundation::{OutputTarget, StepKind};

/// Indentation applied to bodies.
pub const INDENT: &str = "  ";

/// Wraps a body in the declaration syntax for `target`.
#[must_use]
pub fn format_step(body: &str, kind: StepKind, step_text: &str, target: OutputTarget) -> String {
    let mut out = String::new();
    match target {
        OutputTarget::Cucumber => {
            let _ = writeln!(
                out,
                "{}(/^{}$/, async function () {{",
                kind.keyword(),
                escape_regex_literal(step_text)
            );
            push_indented(&mut out, body);
            out.push_str("});");
        }
        OutputTarget::PlaywrightBdd => {
            let _ = writeln!(
                out,
                "await test.step(\"{} {}\", async () => {{",
                kind.keyword(),
                escape_string_literal(step_text, '"')
            );
            push_indented(&mut out, body);
            out.push_str("});");
        }
        OutputTarget::Generic => {
            let _ = writeln!(out, "// {} {}", kind.keyword(), escape_comment_text(step_text));
            out.push_str("{\n");
            push_indented(&mut out, body);
            out.push('}');
        }
    }
    out
}

/// Indents every non-empty line of `text`.
#[must_use]
pub fn indent(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_prefixed(&mut out, text, prefix);
    out
}

fn push_indented(out: &mut String, body: &str) {
    push_prefixed(out, body, INDENT);
}

fn push_prefixed(out: &mut String, text: &str, prefix: &str) {
    for line in text.lines() {
        if !line.trim().is_empty() {
            out.push_str(prefix);
            out.push_str(line);
        }
        out.push('\n');
    }
}

/// The kind and literal step text recovered from a formatted declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDeclaration {
    /// Declared kind
    pub kind: StepKind,
    /// Unescaped step text
    pub step_text: String,
}

/// Reads back the kind and step text from the first line of a declaration.
///
/// Inverse of [`format_step`] for the declaration line.
#[must_use]
pub fn read_declaration(declaration: &str, target: OutputTarget) -> Option<ParsedDeclaration> {
    let first = declaration.lines().next()?;
    let (kind, escaped, unescape): (StepKind, &str, fn(&str) -> String) = match target {
        OutputTarget::Cucumber => {
            let (keyword, rest) = first.split_once("(/^")?;
            let escaped = rest.strip_suffix("$/, async function () {")?;
            (parse_kind(keyword)?, escaped, unescape_regex_literal)
        }
        OutputTarget::PlaywrightBdd => {
            let rest = first.strip_prefix("await test.step(\"")?;
            let rest = rest.strip_suffix("\", async () => {")?;
            let (keyword, escaped) = rest.split_once(' ')?;
            (parse_kind(keyword)?, escaped, unescape_string_literal)
        }
        OutputTarget::Generic => {
            let rest = first.strip_prefix("// ")?;
            let (keyword, escaped) = rest.split_once(' ')?;
            (parse_kind(keyword)?, escaped, unescape_string_literal)
        }
    };
    Some(ParsedDeclaration {
        kind,
        step_text: unescape(escaped),
    })
}

fn parse_kind(keyword: &str) -> Option<StepKind> {
    StepKind::ALL.into_iter().find(|k| k.keyword() == keyword)
}
