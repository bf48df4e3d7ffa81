//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic and
//! infrastructure implementations, keeping the core independent of the
//! concrete storage backend.

mod store;

pub use store::KeyValueStorePort;
