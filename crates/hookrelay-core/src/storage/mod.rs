//! Storage ports for Hookrelay.
//!
//! Defines the staging store and blob store traits the bridge is generic
//! over. Implementations live in hookrelay-infra.

pub mod blob_store;
pub mod staging_store;
