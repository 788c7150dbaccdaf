//! Call-bridge logic and storage port definitions for Hookrelay.
//!
//! This crate defines the "ports" (storage traits) the infrastructure layer
//! implements, plus the bridge built on top of them: the request exporter,
//! the response poller, and the orchestrating `CallBridge`. It depends only
//! on `hookrelay-types` -- never on `hookrelay-infra` or any database/IO
//! crate, so the bridge runs unmodified against in-memory fakes in tests.

pub mod call;
pub mod storage;
