//! Integration tests for Layer 1: Gherkin extraction
//!
//! Tests for step extraction, conjunction handling, attached arguments,
//! and robustness on malformed scripts.

mod arguments;
mod extraction;
mod robustness;
