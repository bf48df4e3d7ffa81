//! # cs-infra
//!
//! Adapters implementing the `cs-core` key-value store port: an
//! in-memory store for tests and ephemeral sessions, and a JSON-file
//! store for persistent ones.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileKeyValueStore;
pub use memory::MemoryKeyValueStore;
