//! Infrastructure implementations for Hookrelay.
//!
//! Concrete backends for the storage ports defined in `hookrelay-core`:
//! a SQLite staging store (per-call scratch tables over a split
//! reader/writer WAL pool) and a filesystem blob store, plus config.toml
//! loading and data directory resolution.

pub mod config;
pub mod sqlite;
pub mod storage;

#[cfg(test)]
mod end_to_end;
