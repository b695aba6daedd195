use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use service::graphs::GraphService;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod graphs;

#[derive(Clone)]
pub struct AppState {
    pub graphs: GraphService,
}

/// Files under `ui_dir`, with `index.html` for every path that is not a file.
pub fn ui_service(ui_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(ui_dir).fallback(ServeFile::new(ui_dir.join("index.html")))
}

/// Build the application router: the two graph endpoints, everything else
/// (including other methods on the API paths) served from the UI bundle.
pub fn build_router(state: AppState, ui_dir: impl AsRef<Path>, cors: CorsLayer) -> Router {
    let ui = ui_service(ui_dir.as_ref());

    Router::new()
        .route("/api/graphs", post(graphs::create_graph).fallback_service(ui.clone()))
        .route("/api/graphs/:id", get(graphs::show_graph).fallback_service(ui.clone()))
        .fallback_service(ui)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
