//! Integration tests for Layer 2: Codegen
//!
//! Tests for template formatting, step compilation with fallback, and
//! whole-file assembly.

mod assembly;
mod formatting;
