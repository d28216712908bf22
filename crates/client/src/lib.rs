//! Store-client boundary and write pipeline for cellwire
//!
//! This crate holds the side-effecting half of the marshalling layer:
//! - StoreClient: the injected collaborator exposing the store's typed
//!   write and refresh primitives
//! - WriteBridge: coerce → dispatch exactly one primitive → interpret
//! - testing::MemoryStore: a recording in-memory client for tests
//!
//! The bridge is the only component that touches the client, and it never
//! retries, buffers, or reorders: delivery policy is selected per call via
//! `RequestKind` and executed entirely inside the client.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bridge;
pub mod store;
pub mod testing;

pub use bridge::WriteBridge;
pub use store::StoreClient;
