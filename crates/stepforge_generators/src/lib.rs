//! Standard step generators for stepforge.
//!
//! Each module registers one family of phrasings with their generators:
//! - [`interaction`] - Clicks, form input, keyboard, and on-screen assertions
//! - [`navigation`] - Routes, history, and URL assertions
//! - [`auth`] - Users, sessions, and access control
//! - [`store`] - Reactive store state, actions, and getters
//! - [`network`] - Endpoint stubbing and request assertions
//!
//! Modules are registered in [`MODULE_ORDER`]. Within a module, specific
//! phrasings come before generic ones, and across modules earlier modules
//! take priority.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod interaction;
pub mod navigation;
pub mod network;
pub mod store;
pub mod support;

use stepforge_foundation::{ErrorContext, Result};
use stepforge_registry::PatternRegistry;

/// A module's registration entry point.
pub type RegisterFn = fn(&mut PatternRegistry) -> Result<()>;

/// Generator modules in registration (priority) order.
pub const MODULE_ORDER: [(&str, RegisterFn); 5] = [
    ("interaction", interaction::register_steps),
    ("navigation", navigation::register_steps),
    ("auth", auth::register_steps),
    ("store", store::register_steps),
    ("network", network::register_steps),
];

/// Registers every standard module into `registry`.
///
/// # Errors
///
/// Returns the first registration defect, tagged with the module that
/// raised it.
pub fn register_all(registry: &mut PatternRegistry) -> Result<()> {
    for (module, register) in MODULE_ORDER {
        let before = registry.len();
        register(registry).map_err(|e| e.with_context(ErrorContext::new().with_module(module)))?;
        tracing::debug!(module, patterns = registry.len() - before, "registered generator module");
    }
    Ok(())
}

/// Builds a registry holding every standard pattern.
///
/// # Errors
///
/// Returns a registration defect if a standard pattern is malformed.
pub fn standard_registry() -> Result<PatternRegistry> {
    let mut registry = PatternRegistry::new();
    register_all(&mut registry)?;
    tracing::info!(patterns = registry.len(), "standard registry ready");
    Ok(registry)
}
