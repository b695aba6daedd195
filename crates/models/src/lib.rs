//! Data model shared by the store, the HTTP layer and the client.
//! - `Graph` is the unit of storage, keyed by its server-assigned id.
//! - Nodes and edges are kept in client order; no referential checks.

pub mod errors;
pub mod graph;

pub use graph::{Edge, Graph, Node, NodeId};
