//! Integration tests for listing and ranked search

use stepforge_registry::search::{DESCRIPTION_WEIGHT, PATTERN_WEIGHT, TAG_WEIGHT};
use stepforge_registry::{PatternDescriptor, PatternRegistry};

use crate::echo;

fn registry() -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    registry
        .register(
            "described",
            PatternDescriptor::action("I submit", echo).with_description("Log in to the app"),
        )
        .unwrap();
    registry
        .register(
            "tagged",
            PatternDescriptor::action("I press enter", echo).with_tags(["login"]),
        )
        .unwrap();
    registry
        .register(
            "everywhere",
            PatternDescriptor::action("I login", echo)
                .with_tags(["login"])
                .with_description("login shortcut"),
        )
        .unwrap();
    registry
        .register("unrelated", PatternDescriptor::action("I wait", echo))
        .unwrap();
    registry
}

#[test]
fn list_preserves_registry_order() {
    let keys: Vec<String> = registry().list_patterns().into_iter().map(|s| s.key).collect();
    assert_eq!(keys, vec!["described", "tagged", "everywhere", "unrelated"]);
}

#[test]
fn search_ranks_by_weighted_fields() {
    let hits = registry().search("LOGIN");
    let ranked: Vec<(&str, u32)> = hits.iter().map(|h| (h.summary.key.as_str(), h.score)).collect();
    assert_eq!(
        ranked,
        vec![
            ("everywhere", PATTERN_WEIGHT + TAG_WEIGHT + DESCRIPTION_WEIGHT),
            ("tagged", TAG_WEIGHT),
        ]
    );
}

#[test]
fn scores_are_non_increasing() {
    let registry = registry();
    for query in ["i", "log", "press", "submit"] {
        let hits = registry.search(query);
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score), "query {query}");
        assert!(hits.iter().all(|h| h.score > 0));
    }
}

#[test]
fn blank_query_returns_nothing() {
    assert!(registry().search("   ").is_empty());
}

#[test]
fn equal_scores_keep_registration_order() {
    let mut registry = PatternRegistry::new();
    for key in ["submit-order", "add-item", "remove-item"] {
        registry
            .register(key, PatternDescriptor::action(format!("I run {key}"), echo).with_tags(["cart"]))
            .unwrap();
    }
    let hits = registry.search("cart");
    assert!(hits.iter().all(|h| h.score == TAG_WEIGHT));
    let keys: Vec<&str> = hits.iter().map(|h| h.summary.key.as_str()).collect();
    assert_eq!(keys, vec!["submit-order", "add-item", "remove-item"]);
}
