//! HTTP client for the graph service plus a small builder for graphs whose
//! edges are declared by node name.

pub mod errors;
pub mod quick_graph;

use models::Graph;
use reqwest::StatusCode;
use tracing::info;

pub use errors::ClientError;
pub use quick_graph::QuickGraph;

#[derive(Clone, Debug)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    /// `base_url` like `http://127.0.0.1:8080`; a trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// POST the graph; returns it as stored, with its server-assigned id.
    pub async fn create(&self, graph: &Graph) -> Result<Graph, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/graphs", self.base_url))
            .json(graph)
            .send()
            .await?;
        if resp.status() != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus(resp.status().as_u16()));
        }
        let created: Graph = resp.json().await?;
        info!(graph_id = %created.id, url = %self.view_url(&created.id), "graph created");
        Ok(created)
    }

    /// GET a graph; `None` when the service does not know the id.
    pub async fn fetch(&self, id: &str) -> Result<Option<Graph>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/graphs/{}", self.base_url, id))
            .send()
            .await?;
        match resp.status() {
            StatusCode::OK => Ok(Some(resp.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            other => Err(ClientError::UnexpectedStatus(other.as_u16())),
        }
    }

    /// Where the bundled UI shows the graph.
    pub fn view_url(&self, id: &str) -> String {
        format!("{}/graphs/{}", self.base_url, id)
    }
}
