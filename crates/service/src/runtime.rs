//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Warn when the UI asset directory is missing; create the data directory.
pub async fn ensure_env(ui_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(ui_dir, data_dir).await
}
