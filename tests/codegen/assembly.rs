//! Integration tests for file assembly

use stepforge_codegen::{AssemblerConfig, FileAssembler, generate_step_definitions_file};
use stepforge_foundation::{ExecutionTarget, GenerationOptions, OutputTarget};
use stepforge_generators::standard_registry;

const CHECKOUT: &str = r#"
Feature: Checkout
  Scenario: Pay
    Given I am logged in as a "customer"
    When I click the "Pay" button
    Then I should see "Thanks"
  Scenario: Pay again
    When I click the "Pay" button
    Then I should see "Thanks"
"#;

#[test]
fn cucumber_component_mount_file() {
    let registry = standard_registry().unwrap();
    let options = GenerationOptions::default()
        .with_output_target(OutputTarget::Cucumber)
        .with_execution_target(ExecutionTarget::ComponentMount);
    let out = generate_step_definitions_file(&registry, CHECKOUT, "checkout.feature", &options);

    assert!(out.starts_with("// Step definitions generated from checkout.feature by stepforge.\n"));
    assert!(out.contains("import { Given, When, Then } from '@cucumber/cucumber';"));
    assert!(out.contains("import { render, screen, fireEvent, waitFor } from '@testing-library/vue';"));
    assert!(out.contains("await fireEvent.click(screen.getByRole('button', { name: 'Pay' }));"));
    assert_eq!(out.matches("When(/^I click the \"Pay\" button$/").count(), 2);
}

#[test]
fn deduplicated_grouped_file() {
    let registry = standard_registry().unwrap();
    let assembler = FileAssembler::with_config(
        &registry,
        AssemblerConfig::default()
            .with_deduplicate(true)
            .with_group_by_kind(true),
    );
    let out = assembler.assemble(CHECKOUT, "checkout.feature", &GenerationOptions::default());

    assert_eq!(out.matches("// When I click the \"Pay\" button").count(), 1);
    let given = out.find("// Given I am logged in").unwrap();
    let when = out.find("// When I click").unwrap();
    let then = out.find("// Then I should see").unwrap();
    assert!(given < when && when < then);
}

#[test]
fn playwright_bdd_file_is_wrapped() {
    let registry = standard_registry().unwrap();
    let options = GenerationOptions::default().with_output_target(OutputTarget::PlaywrightBdd);
    let out = generate_step_definitions_file(&registry, CHECKOUT, "checkout.feature", &options);

    assert!(out.contains("import { test, expect } from '@playwright/test';"));
    assert!(out.contains("test('Pay', async ({ page }) => {\n"));
    assert!(out.contains("});\n\ntest('Pay again', async ({ page }) => {\n"));
    assert!(out.contains("  await test.step(\"Then I should see \\\"Thanks\\\"\", async () => {\n"));
    assert!(out.ends_with("});\n"));
}

#[test]
fn script_without_steps_still_has_header() {
    let registry = standard_registry().unwrap();
    let out = generate_step_definitions_file(&registry, "Feature: Empty\n", "empty.feature", &GenerationOptions::default());
    assert!(out.contains("// Feature: Empty"));
    assert!(!out.contains("{\n"));
}
