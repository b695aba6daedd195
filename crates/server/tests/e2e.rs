use std::net::SocketAddr;

use client::{GraphClient, QuickGraph};
use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use tempfile::TempDir;
use tokio::net::TcpListener;

use server::startup::build_app;

struct TestApp {
    base_url: String,
    _dir: TempDir,
}

/// Full startup path (config, data dir, sled file) on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let ui_dir = dir.path().join("ui");
    std::fs::create_dir_all(&ui_dir)?;
    std::fs::write(ui_dir.join("index.html"), "<html>ui</html>")?;

    let mut cfg = AppConfig::default();
    cfg.storage.path = dir.path().join("data/graphs.db").to_string_lossy().into_owned();
    cfg.ui.dir = ui_dir.to_string_lossy().into_owned();
    cfg.normalize_and_validate()?;

    let app = build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, _dir: dir })
}

#[tokio::test]
async fn e2e_quick_graph_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = GraphClient::new(&app.base_url);

    let mut g = QuickGraph::new();
    g.set_name("My Graph");
    g.add_node("a");
    g.add_node("b");
    g.add_node("c");
    g.add_edge("a", "b", "Edge 1").add_edge("a", "b", "Edge 2").add_edge("c", "b", "Edge 3");

    let created = g.post(&client).await?;
    assert!(!created.id.is_empty());
    assert_eq!(created.edges.len(), 3);

    let fetched = client.fetch(&created.id).await?.expect("graph stored");
    assert_eq!(fetched, created);
    assert_eq!(client.view_url(&created.id), format!("{}/graphs/{}", app.base_url, created.id));
    Ok(())
}

#[tokio::test]
async fn e2e_fetch_unknown_is_none() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = GraphClient::new(&app.base_url);
    assert!(client.fetch("does-not-exist").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_raw_http_statuses() -> anyhow::Result<()> {
    let app = start_server().await?;
    let http = reqwest::Client::new();

    let res = http
        .post(format!("{}/api/graphs", app.base_url))
        .body("{\"nodes\": 5}")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    let res = http.get(format!("{}/graphs/anything", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "<html>ui</html>");
    Ok(())
}
