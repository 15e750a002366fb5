//! Integration tests for Layer 3: Generators
//!
//! Tests for the standard generator modules: every pattern's example, and
//! priority between overlapping phrasings.

mod coverage;
mod priority;
