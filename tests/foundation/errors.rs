//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use stepforge_foundation::{Error, ErrorContext, ErrorKind, OptionAxis};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_pattern() {
    let err = Error::invalid_pattern("interaction/click", "I click (", "unclosed group");
    assert!(matches!(err.kind, ErrorKind::InvalidPattern { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("interaction/click"));
    assert!(msg.contains("unclosed group"));
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch("fill", 1, 2);
    assert!(matches!(
        err.kind,
        ErrorKind::ArityMismatch {
            declared: 1,
            groups: 2,
            ..
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("reads 1"));
    assert!(msg.contains("has 2"));
}

#[test]
fn error_unknown_option_names_axis() {
    let err = Error::unknown_option(OptionAxis::ExecutionTarget, "selenium");
    assert_eq!(format!("{err}"), "unknown execution target: selenium");
}

#[test]
fn registration_defects_are_classified() {
    assert!(Error::example_mismatch("k", "x").is_registration_defect());
    assert!(Error::duplicate_key("k").is_registration_defect());
    assert!(!Error::config("bad").is_registration_defect());
    assert!(!Error::pattern_not_found("k").is_registration_defect());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_module("auth")
        .with_source("login.feature")
        .with_line(7);
    assert_eq!(format!("{context}"), "in module auth at login.feature:7");
}

#[test]
fn context_is_kept_on_error() {
    let err = Error::duplicate_key("auth/log-out")
        .with_context(ErrorContext::new().with_module("auth"));
    assert_eq!(err.context.unwrap().module.as_deref(), Some("auth"));
}
