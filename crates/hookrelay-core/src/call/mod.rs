//! The request/response call bridge.
//!
//! `bridge` orchestrates one synchronous webhook invocation over the
//! storage ports, `export` publishes the staged request blob, and `poll`
//! is the deadline-bounded wait for the correlated response.

pub mod bridge;
pub mod export;
pub mod poll;

#[cfg(test)]
pub(crate) mod fakes;
