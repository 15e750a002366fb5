//! Feature script to step definitions file through every layer

use stepforge::codegen::{FileAssembler, StepCompiler};
use stepforge::foundation::{ExecutionTarget, OutputTarget, StepKind};
use stepforge::generators::standard_registry;
use stepforge::gherkin::ConjunctionPolicy;
use stepforge::runtime::StepforgeConfig;

const SHOP: &str = r#"
Feature: Shop
  Background:
    Given the API "/api/products" returns status 200 with "[]"
    And I am logged in as an "admin" user

  Scenario: Empty catalogue
    When I visit the "products" page
    Then I should see "No products"
    And a GET request should have been made to "/api/products"

  Scenario: Something new
    When I summon a unicorn
    Then the store state "catalogue.count" should be "0"
"#;

#[test]
fn config_drives_assembly() {
    let config = StepforgeConfig::from_toml_str(
        r#"
        output-target = "cucumber"
        execution-target = "component-mount"
        group-by-kind = true
        "#,
    )
    .unwrap();
    let registry = standard_registry().unwrap();
    let out = FileAssembler::with_config(&registry, config.assembler_config())
        .assemble(SHOP, "shop.feature", &config.generation_options());

    assert!(out.contains("// Output target: cucumber. Execution target: component-mount."));
    assert!(out.contains("import { router } from '@/router';"));
    assert!(out.contains("await router.push('/products');"));
    assert!(out.contains("expect(store.state['catalogue']['count']).toEqual(0);"));
    assert!(out.contains("throw new Error('Step not implemented: I summon a unicorn');"));

    let last_given = out.rfind("Given(/^").unwrap();
    let first_when = out.find("When(/^").unwrap();
    let last_when = out.rfind("When(/^").unwrap();
    let first_then = out.find("Then(/^").unwrap();
    assert!(last_given < first_when && last_when < first_then);
}

#[test]
fn every_step_gets_exactly_one_declaration() {
    let registry = standard_registry().unwrap();
    let compiler = StepCompiler::new(&registry);
    let options = StepforgeConfig::default()
        .with_output_target(OutputTarget::Generic)
        .generation_options();
    let steps = compiler.generate_feature_steps(SHOP, &options);

    assert_eq!(steps.given.len(), 2);
    assert_eq!(steps.when.len(), 2);
    assert_eq!(steps.then.len(), 3);
    assert_eq!(steps.len(), 7);
    assert!(steps.get(StepKind::Then)[1].contains("request.method() === 'GET'"));
}

#[test]
fn legacy_conjunctions_file() {
    let config = StepforgeConfig::default()
        .with_output_target(OutputTarget::Cucumber)
        .with_execution_target(ExecutionTarget::Playwright)
        .with_conjunctions(ConjunctionPolicy::AlwaysWhen);
    let registry = standard_registry().unwrap();
    let out = FileAssembler::with_config(&registry, config.assembler_config())
        .assemble(SHOP, "shop.feature", &config.generation_options());

    assert!(out.contains("When(/^I am logged in as an \"admin\" user$/"));
    assert!(out.contains("When(/^a GET request should have been made to \"\\/api\\/products\"$/"));
}
