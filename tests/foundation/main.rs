//! Integration tests for Layer 0: Foundation
//!
//! Tests for step vocabulary, generation options, errors, and escaping.

mod errors;
