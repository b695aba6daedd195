//! Storage abstractions for graph records
//!
//! `GraphStore` is the seam the HTTP layer holds; `SledGraphStore` persists
//! each graph as JSON under its id in a single sled tree.

use async_trait::async_trait;
use models::Graph;

use crate::errors::ServiceError;

pub mod sled_store;

pub use sled_store::SledGraphStore;

/// Keyed graph storage. Single-key operations are atomic; nothing orders
/// concurrent requests on the same id.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Insert or overwrite the record at `id`.
    async fn put(&self, id: &str, graph: &Graph) -> Result<(), ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<Graph>, ServiceError>;
    /// Number of stored records.
    async fn len(&self) -> Result<usize, ServiceError>;
}
