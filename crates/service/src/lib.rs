//! Service layer for graph records.
//! - `storage` holds the `GraphStore` seam and its sled-backed implementation.
//! - `graphs` applies the create/show rules on top of a store.

pub mod errors;
pub mod graphs;
pub mod runtime;
pub mod storage;
