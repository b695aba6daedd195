//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Ensure expected directories exist; warn on missing optional ones.
/// The UI directory is optional (the API works without it), the data
/// directory is created if absent.
pub async fn ensure_env(ui_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(ui_dir).await.is_err() {
        warn!(%ui_dir, "ui assets directory not found; static assets will 404");
    }
    if !data_dir.is_empty() {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let data_path = tmp.path().join("nested/data");
        let data = data_path.to_string_lossy().into_owned();
        ensure_env("/nonexistent-ui-dir", &data).await?;
        assert!(tokio::fs::metadata(&data_path).await?.is_dir());
        Ok(())
    }
}
