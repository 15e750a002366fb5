//! Integration tests for pattern registration

use stepforge_foundation::{ErrorKind, PatternKind};
use stepforge_registry::{PatternDescriptor, PatternRegistry};

use crate::echo;

#[test]
fn empty_registry() {
    let registry = PatternRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.all().is_empty());
    assert!(registry.get("anything").is_none());
}

#[test]
fn kinds_are_preserved() {
    let mut registry = PatternRegistry::new();
    registry.register("s", PatternDescriptor::setup("a user", echo)).unwrap();
    registry.register("a", PatternDescriptor::action("I go", echo)).unwrap();
    registry.register("t", PatternDescriptor::assertion("I see", echo)).unwrap();

    let kinds: Vec<_> = registry.all().iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, vec![PatternKind::Setup, PatternKind::Action, PatternKind::Assertion]);
}

#[test]
fn failed_registration_leaves_registry_unchanged() {
    let mut registry = PatternRegistry::new();
    registry.register("ok", PatternDescriptor::action("I go", echo)).unwrap();

    let err = registry
        .register("ok", PatternDescriptor::action("I go (", echo))
        .unwrap_err();
    assert!(err.is_registration_defect());
    assert_eq!(registry.get("ok").unwrap().descriptor().pattern, "I go");
}

#[test]
fn optional_groups_count_toward_arity() {
    let mut registry = PatternRegistry::new();
    let err = registry
        .register(
            "dispatch",
            PatternDescriptor::action(r#"I dispatch "([^"]*)"(?: with "([^"]*)")?"#, echo).with_arity(1),
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { declared: 1, groups: 2, .. }));
}

#[test]
fn replacement_returns_previous_descriptor() {
    let mut registry = PatternRegistry::new();
    assert!(registry.register("k", PatternDescriptor::action("one", echo)).unwrap().is_none());
    let previous = registry.register("k", PatternDescriptor::action("two", echo)).unwrap();
    assert_eq!(previous.map(|d| d.pattern).as_deref(), Some("one"));
    assert_eq!(registry.len(), 1);
}
