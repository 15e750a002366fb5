//! Integration tests for step extraction

use stepforge_foundation::{Keyword, StepKind};
use stepforge_gherkin::{ConjunctionPolicy, ExtractorConfig, ScriptExtractor, extract, extract_script};

const LOGIN: &str = r#"
@auth
Feature: Login
  Users sign in with email and password.

  Background:
    Given a user exists with email "a@b.com"

  # happy path
  Scenario: Valid credentials
    When I visit the "login" page
    And I fill in the "Email" field with "a@b.com"
    * I click the "Log in" button
    Then I should be logged in
    But I should not see "Error"
"#;

#[test]
fn extracts_every_step_in_order() {
    let steps = extract(LOGIN);
    let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            r#"a user exists with email "a@b.com""#,
            r#"I visit the "login" page"#,
            r#"I fill in the "Email" field with "a@b.com""#,
            r#"I click the "Log in" button"#,
            "I should be logged in",
            r#"I should not see "Error""#,
        ]
    );
}

#[test]
fn conjunctions_inherit_previous_kind() {
    let kinds: Vec<StepKind> = extract(LOGIN).iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Given,
            StepKind::When,
            StepKind::When,
            StepKind::When,
            StepKind::Then,
            StepKind::Then,
        ]
    );
}

#[test]
fn always_when_policy() {
    let extractor = ScriptExtractor::with_config(
        ExtractorConfig::default().with_conjunctions(ConjunctionPolicy::AlwaysWhen),
    );
    let last = extractor.extract(LOGIN).pop().unwrap();
    assert_eq!(last.keyword, Keyword::But);
    assert_eq!(last.kind, StepKind::When);
}

#[test]
fn leading_conjunction_is_given() {
    let steps = extract("Scenario: s\n  And something first\n");
    assert_eq!(steps[0].kind, StepKind::Given);
}

#[test]
fn headers_reset_inherited_kind() {
    let steps = extract("Scenario: a\n  Then done\nScenario: b\n  And next\n");
    assert_eq!(steps[1].kind, StepKind::Given);
    assert_eq!(steps[1].scenario.as_deref(), Some("b"));
}

#[test]
fn records_lines_and_scenarios() {
    let script = extract_script(LOGIN);
    assert_eq!(script.feature.as_deref(), Some("Login"));
    assert_eq!(script.steps[0].line, 7);
    assert_eq!(script.steps[0].scenario.as_deref(), Some("Background"));
    assert_eq!(script.steps[1].scenario.as_deref(), Some("Valid credentials"));
    assert_eq!(script.steps[3].original, r#"* I click the "Log in" button"#);
}

#[test]
fn keywords_are_case_sensitive_and_need_a_sentence() {
    assert!(extract("given lowercase\nGiven\nGivenNoSpace\n").is_empty());
}

#[test]
fn outline_examples_are_collected() {
    let script = extract_script(
        "Scenario Outline: o\n  Given I have <n> items\n  Examples:\n    | n |\n    | 1 |\n    | 2 |\n",
    );
    assert_eq!(script.steps.len(), 1);
    assert_eq!(script.steps[0].text, "I have <n> items");
    assert!(script.steps[0].data_table.is_none());
    assert_eq!(script.examples_rows, vec![vec!["n"], vec!["1"], vec!["2"]]);
}
