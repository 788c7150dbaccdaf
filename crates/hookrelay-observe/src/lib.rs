//! Tracing subscriber setup for Hookrelay binaries.

pub mod tracing_setup;
