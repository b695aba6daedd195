use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use models::Graph;
use service::errors::ServiceError;
use tracing::debug;

use crate::errors::ApiError;
use crate::routes::AppState;

pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// POST /api/graphs
///
/// The body is decoded by hand so that every decode failure, including a
/// missing content type, answers 422.
pub async fn create_graph(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let graph = Graph::from_json_slice(&body).map_err(|e| {
        debug!(error = %e, "rejected graph payload");
        ApiError::Unprocessable(e.to_string())
    })?;
    let created = state.graphs.create(graph).await?;
    json_response(StatusCode::CREATED, &created)
}

/// GET /api/graphs/:id
pub async fn show_graph(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    match state.graphs.show(&id).await? {
        Some(graph) => json_response(StatusCode::OK, &graph),
        None => Err(ApiError::NotFound),
    }
}

fn json_response(status: StatusCode, graph: &Graph) -> Result<Response, ApiError> {
    let body = graph.to_json_vec().map_err(ServiceError::from)?;
    Ok((status, [(header::CONTENT_TYPE, JSON_UTF8)], body).into_response())
}
