//! Configuration, logging, and CLI for stepforge.
//!
//! This crate provides:
//! - [`StepforgeConfig`] - Settings loaded from `stepforge.toml`
//! - [`init_logging`] - `tracing` subscriber setup for the binary
//! - [`cli`] - Command-line parsing and command execution
//!
//! Reading feature files and writing generated output happens only here.
//! The library crates below never touch the filesystem.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command, run};
pub use config::{CONFIG_FILE_NAME, StepforgeConfig};
pub use logging::{DEFAULT_FILTER, VERBOSE_FILTER, init_logging};
