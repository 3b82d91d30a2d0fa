//! # offers-observability
//!
//! Tracing subscriber setup and the structured events emitted by the
//! comparator and catalog crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing};
