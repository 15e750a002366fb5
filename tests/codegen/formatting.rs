//! Integration tests for the template formatter

use proptest::prelude::*;
use stepforge_codegen::{format_step, read_declaration};
use stepforge_foundation::{OutputTarget, StepKind};

const TARGETS: [OutputTarget; 3] = [OutputTarget::Cucumber, OutputTarget::PlaywrightBdd, OutputTarget::Generic];

#[test]
fn cucumber_escapes_regex_metacharacters() {
    let out = format_step("go();", StepKind::When, "I visit /a/b?x=1", OutputTarget::Cucumber);
    assert!(out.starts_with(r"When(/^I visit \/a\/b\?x=1$/, async function () {"));
}

#[test]
fn multiline_body_is_indented_line_by_line() {
    let out = format_step("a();\nb();", StepKind::Given, "s", OutputTarget::Cucumber);
    assert_eq!(out, "Given(/^s$/, async function () {\n  a();\n  b();\n});");
}

#[test]
fn declarations_end_without_trailing_newline() {
    for target in TARGETS {
        assert!(!format_step("x();", StepKind::Then, "s", target).ends_with('\n'));
    }
}

proptest! {
    /// The literal step text is recoverable from every declaration.
    #[test]
    fn step_text_round_trip(text in any::<String>()) {
        for target in TARGETS {
            let out = format_step("x();", StepKind::Given, &text, target);
            let parsed = read_declaration(&out, target).unwrap();
            prop_assert_eq!(parsed.kind, StepKind::Given);
            prop_assert_eq!(parsed.step_text, text.clone());
        }
    }
}
