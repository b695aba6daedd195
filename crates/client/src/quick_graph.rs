use models::{Edge, Graph, Node, NodeId};

use crate::{ClientError, GraphClient};

/// Edge declared by endpoint *names*, resolved in `finalize`.
#[derive(Clone, Debug)]
struct PendingEdge {
    source: String,
    target: String,
    label: String,
}

/// Builder for a multigraph whose edges refer to nodes by name.
///
/// Ids are sequential ("1", "2", ...) across nodes and declared edges;
/// resolved edges take fresh ids after those. Since names need not be unique,
/// an edge `a -> b` becomes one edge per pair of nodes named `a` and `b`, and
/// an edge naming an unknown node disappears.
///
/// ```
/// use client::QuickGraph;
///
/// let mut g = QuickGraph::new();
/// g.set_name("My Graph");
/// g.add_node("a");
/// g.add_node("b");
/// g.add_edge("a", "b", "Edge 1");
/// let graph = g.finalize();
/// assert_eq!(graph.edges.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct QuickGraph {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<PendingEdge>,
    next_id: u64,
}

impl Default for QuickGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickGraph {
    pub fn new() -> Self {
        Self { name: "New Graph".into(), nodes: Vec::new(), edges: Vec::new(), next_id: 1 }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Add a node and return the id it was given.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::new(self.generate_id());
        self.nodes.push(Node { id: id.clone(), name: name.into() });
        id
    }

    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Self {
        // a declared edge uses up an id even though finalize renumbers it
        self.generate_id();
        self.edges.push(PendingEdge { source: source.into(), target: target.into(), label: label.into() });
        self
    }

    /// Resolve named edges into concrete ones. Edge ids continue after every
    /// id handed out so far. The graph id is left empty for the server to assign.
    pub fn finalize(&self) -> Graph {
        let mut next_id = self.next_id;
        let mut edges = Vec::new();

        for pending in &self.edges {
            let sources = self.nodes.iter().filter(|n| n.name == pending.source);
            for source in sources {
                for target in self.nodes.iter().filter(|n| n.name == pending.target) {
                    edges.push(Edge {
                        id: next_id.to_string(),
                        name: pending.label.clone(),
                        source: source.id.clone(),
                        target: target.id.clone(),
                    });
                    next_id += 1;
                }
            }
        }

        Graph { id: String::new(), name: self.name.clone(), nodes: self.nodes.clone(), edges }
    }

    /// Finalize and create the graph on the service.
    pub async fn post(&self, client: &GraphClient) -> Result<Graph, ClientError> {
        client.create(&self.finalize()).await
    }

    fn generate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}
