//! Shared domain types for Hookrelay.
//!
//! This crate contains the types used across the Hookrelay bridge:
//! correlation IDs and the names derived from them, the staged webhook
//! request, poller timing configuration, and the error enums.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod correlation;
pub mod error;
pub mod request;
