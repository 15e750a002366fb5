//! The command-line surface over real files

use std::fs;

use clap::Parser;
use stepforge::foundation::ErrorKind;
use stepforge::runtime::{Cli, run};
use tempfile::tempdir;

fn run_args(args: &[&str]) -> stepforge::foundation::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("stepforge").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn generate_writes_output_file() {
    let dir = tempdir().unwrap();
    let feature = dir.path().join("login.feature");
    let output = dir.path().join("login.steps.js");
    fs::write(
        &feature,
        "Feature: Login\n  Scenario: s\n    When I log in with email \"a@b.com\" and password \"pw\"\n    Then I should be logged in\n",
    )
    .unwrap();

    let stdout = run_args(&[
        "--output-target",
        "cucumber",
        "generate",
        feature.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    assert!(stdout.is_empty());
    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.starts_with("// Step definitions generated from login.feature by stepforge."));
    assert!(generated.contains("await page.getByLabel('Password').fill('pw');"));
}

#[test]
fn generate_reads_config_file() {
    let dir = tempdir().unwrap();
    let feature = dir.path().join("nav.feature");
    let config = dir.path().join("stepforge.toml");
    fs::write(&feature, "When I go back\n").unwrap();
    fs::write(&config, "output-target = \"playwright-bdd\"\nexecution-target = \"component-mount\"\n").unwrap();

    let stdout = run_args(&[
        "--config",
        config.to_str().unwrap(),
        "generate",
        feature.to_str().unwrap(),
    ])
    .unwrap();

    assert!(stdout.contains("test('nav.feature', async ({ page }) => {"));
    assert!(stdout.contains("router.back();"));
}

#[test]
fn missing_feature_is_io_error() {
    let dir = tempdir().unwrap();
    let err = run_args(&["generate", dir.path().join("nope.feature").to_str().unwrap()]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.context.and_then(|c| c.source).unwrap().ends_with("nope.feature"));
}

#[test]
fn bad_config_is_config_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("stepforge.toml");
    fs::write(&config, "output-target = 3\n").unwrap();
    let err = run_args(&["--config", config.to_str().unwrap(), "list"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    let context = err.context.unwrap();
    assert!(context.source.unwrap().ends_with("stepforge.toml"));
    assert_eq!(context.line, Some(1));
}

#[test]
fn list_json_has_every_pattern() {
    let stdout = run_args(&["list", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), stepforge::generators::standard_registry().unwrap().len());
    assert_eq!(entries[0]["key"], "interaction/click-button");
    assert_eq!(entries[0]["kind"], "action");
}
