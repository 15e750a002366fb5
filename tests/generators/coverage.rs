//! Every standard pattern matches its own example and generates a body.

use stepforge_foundation::{ExecutionTarget, GenerationOptions};
use stepforge_generators::standard_registry;
use stepforge_registry::Captures;

const EXECUTION_TARGETS: [ExecutionTarget; 2] = [ExecutionTarget::Playwright, ExecutionTarget::ComponentMount];

#[test]
fn every_pattern_has_an_example_and_metadata() {
    let registry = standard_registry().unwrap();
    for pattern in registry.all() {
        let descriptor = pattern.descriptor();
        assert!(descriptor.metadata.example.is_some(), "{} has no example", pattern.key());
        assert!(!descriptor.metadata.description.is_empty(), "{} has no description", pattern.key());
        assert!(!descriptor.tags.is_empty(), "{} has no tags", pattern.key());
    }
}

#[test]
fn every_example_matches_its_own_pattern() {
    let registry = standard_registry().unwrap();
    for pattern in registry.all() {
        let example = pattern.descriptor().metadata.example.as_deref().unwrap_or_default();
        let caps = pattern
            .regex()
            .captures(example)
            .unwrap_or_else(|| panic!("{} does not match {example:?}", pattern.key()));
        let captures = Captures::from_regex(&caps);
        assert_eq!(captures.len(), pattern.descriptor().arity, "{}", pattern.key());

        for target in EXECUTION_TARGETS {
            let options = GenerationOptions::default().with_execution_target(target);
            let body = (pattern.descriptor().generate)(&captures, &options);
            assert!(!body.trim().is_empty(), "{} ({target}) generated nothing", pattern.key());
            assert!(!captures.overread(), "{} ({target}) read past its captures", pattern.key());
        }
    }
}

#[test]
fn every_example_resolves_to_its_own_pattern() {
    let registry = standard_registry().unwrap();
    for pattern in registry.all() {
        let example = pattern.descriptor().metadata.example.as_deref().unwrap_or_default();
        let resolved = registry.resolve(example).map(|m| m.key().to_string());
        assert_eq!(resolved.as_deref(), Some(pattern.key()), "example {example:?}");
    }
}

#[test]
fn targets_produce_different_idioms() {
    let registry = standard_registry().unwrap();
    let mut differing = 0;
    for pattern in registry.all() {
        let example = pattern.descriptor().metadata.example.as_deref().unwrap_or_default();
        let m = registry.resolve(example).unwrap();
        let browser = m.generate(&GenerationOptions::default());
        let mounted = m.generate(&GenerationOptions::default().with_execution_target(ExecutionTarget::ComponentMount));
        if browser != mounted {
            differing += 1;
        }
    }
    assert_eq!(differing, registry.len());
}
