//! Environment store contract for postflight hooks.
//!
//! This crate provides the host-side environment abstraction: a mutable
//! string key/value store that hooks write extracted variables into, plus
//! the shared constants (variable names) used across crates.

pub mod constants;
mod store;

pub use store::{EnvironmentStore, MemoryEnvironment};
