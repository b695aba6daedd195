use std::sync::Arc;

use axum::Router;
use common::signal::shutdown_signal;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};
use service::{graphs::GraphService, runtime, storage::SledGraphStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the store and assemble the router described by `cfg`.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.ui.dir, &cfg.storage.data_dir()).await?;

    let store = SledGraphStore::open(&cfg.storage.path, &cfg.storage.tree)?;
    let state = AppState { graphs: GraphService::new(Arc::new(store)) };

    Ok(routes::build_router(state, &cfg.ui.dir, build_cors()))
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr()?;
    info!(%addr, ui_dir = %cfg.ui.dir, db = %cfg.storage.path, tree = %cfg.storage.tree, "starting graph server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("graph server stopped");
    Ok(())
}
