use std::sync::Arc;

use models::Graph;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::storage::GraphStore;

/// Create/show operations over a shared `GraphStore`.
#[derive(Clone)]
pub struct GraphService {
    store: Arc<dyn GraphStore>,
}

impl GraphService {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Assign a fresh id (discarding any client-supplied one), store the
    /// graph and return it as stored.
    pub async fn create(&self, graph: Graph) -> Result<Graph, ServiceError> {
        let graph = graph.with_fresh_id();
        self.store.put(&graph.id, &graph).await?;

        let total = self.store.len().await?;
        let dangling = graph.dangling_edges().len();
        info!(graph_id = %graph.id, nodes = graph.nodes.len(), edges = graph.edges.len(), total, "graph_created");
        if dangling > 0 {
            debug!(graph_id = %graph.id, dangling, "graph has edges to unknown nodes");
        }
        Ok(graph)
    }

    pub async fn show(&self, id: &str) -> Result<Option<Graph>, ServiceError> {
        let found = self.store.get(id).await?;
        match &found {
            Some(_) => info!(graph_id = %id, "graph_served"),
            None => debug!(graph_id = %id, "graph_not_found"),
        }
        Ok(found)
    }
}
