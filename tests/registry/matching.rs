//! Integration tests for first-match dispatch

use stepforge_foundation::GenerationOptions;
use stepforge_registry::{PatternDescriptor, PatternRegistry, StepMatcher};

use crate::echo;

const BUTTON: &str = r#"I click the "([^"]*)" button"#;
const ELEMENT: &str = r#"I click (?:the )?"([^"]*)""#;

fn registry(order: &[(&str, &str)]) -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    for (key, pattern) in order {
        registry
            .register(*key, PatternDescriptor::action(*pattern, echo).with_arity(1))
            .unwrap();
    }
    registry
}

#[test]
fn specific_first_wins() {
    let registry = registry(&[("button", BUTTON), ("element", ELEMENT)]);
    let m = StepMatcher::new(&registry)
        .resolve(r#"I click the "Submit" button"#)
        .unwrap();
    assert_eq!(m.key(), "button");
    assert_eq!(m.captures.get(0), Some("Submit"));
}

#[test]
fn generic_first_shadows_specific() {
    let registry = registry(&[("element", ELEMENT), ("button", BUTTON)]);
    let m = StepMatcher::new(&registry)
        .resolve(r#"I click the "Submit" button"#)
        .unwrap();
    assert_eq!(m.key(), "element");
}

#[test]
fn resolve_all_lists_overlaps_in_priority_order() {
    let registry = registry(&[("button", BUTTON), ("element", ELEMENT)]);
    let keys: Vec<String> = StepMatcher::new(&registry)
        .resolve_all(r#"I click the "Submit" button"#)
        .iter()
        .map(|m| m.key().to_string())
        .collect();
    assert_eq!(keys, vec!["button", "element"]);
}

#[test]
fn matching_is_case_insensitive_and_unanchored() {
    let registry = registry(&[("button", BUTTON)]);
    let m = registry
        .resolve(r#"  then I CLICK THE "Go" BUTTON quickly  "#)
        .unwrap();
    assert_eq!(m.generate(&GenerationOptions::default()), "echo(Go);");
}

#[test]
fn no_match_is_none() {
    let registry = registry(&[("button", BUTTON)]);
    assert!(registry.resolve("I perform an unsupported ritual").is_none());
    assert!(registry.resolve("").is_none());
}
