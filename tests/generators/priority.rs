//! Priority between overlapping standard phrasings

use stepforge_foundation::{GenerationOptions, PatternKind};
use stepforge_generators::{MODULE_ORDER, register_all, standard_registry};
use stepforge_registry::{Captures, PatternDescriptor, PatternRegistry, StepMatcher};

#[test]
fn button_click_beats_generic_click() {
    let registry = standard_registry().unwrap();
    let m = registry.resolve(r#"I click the "Submit" button"#).unwrap();
    assert_eq!(m.key(), "interaction/click-button");
    assert_eq!(
        m.generate(&GenerationOptions::default()),
        "await page.getByRole('button', { name: 'Submit' }).click();"
    );

    let overlapping: Vec<String> = StepMatcher::new(&registry)
        .resolve_all(r#"I click the "Submit" button"#)
        .iter()
        .map(|m| m.key().to_string())
        .collect();
    assert_eq!(overlapping, vec!["interaction/click-button", "interaction/click-element"]);
}

#[test]
fn literal_url_beats_page_name() {
    let registry = standard_registry().unwrap();
    assert_eq!(
        registry.resolve(r#"I visit "/admin/users""#).unwrap().key(),
        "navigation/visit-url"
    );
    assert_eq!(
        registry.resolve(r#"I visit the "admin" page"#).unwrap().key(),
        "navigation/visit-page"
    );
}

#[test]
fn standard_registry_is_fresh_each_time() {
    let mut first = standard_registry().unwrap();
    let second = standard_registry().unwrap();
    register_all(&mut first).unwrap();
    assert_eq!(first.keys(), second.keys());
}

#[test]
fn every_module_contributes_tagged_patterns() {
    let registry = standard_registry().unwrap();
    assert!(!registry.by_kind(PatternKind::Setup).is_empty());
    assert!(!registry.by_kind(PatternKind::Action).is_empty());
    assert!(!registry.by_kind(PatternKind::Assertion).is_empty());
    for (module, _) in MODULE_ORDER {
        assert!(!registry.by_tag(module).is_empty(), "module {module} has no self-named tag");
    }
}

#[test]
fn custom_patterns_registered_first_keep_priority() {
    fn custom(_: &Captures, _: &GenerationOptions) -> String {
        "await openCustomMenu();".to_string()
    }

    let mut registry = PatternRegistry::new();
    registry
        .register(
            "custom/click-menu",
            PatternDescriptor::action(r#"I click the "Menu" button"#, custom),
        )
        .unwrap();
    register_all(&mut registry).unwrap();

    assert_eq!(registry.len(), standard_registry().unwrap().len() + 1);
    assert_eq!(registry.resolve(r#"I click the "Menu" button"#).unwrap().key(), "custom/click-menu");
    assert_eq!(
        registry.resolve(r#"I click the "Save" button"#).unwrap().key(),
        "interaction/click-button"
    );
}
