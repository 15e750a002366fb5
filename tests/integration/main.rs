//! Cross-layer integration tests for stepforge
//!
//! Tests that verify correct interaction between multiple crates, from
//! feature file on disk to generated step definitions.

mod cli;
mod end_to_end;
