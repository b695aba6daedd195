use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// sled database directory
    #[serde(default = "default_db_path")]
    pub path: String,
    /// tree ("bucket") holding the graph records
    #[serde(default = "default_tree")]
    pub tree: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: default_db_path(), tree: default_tree() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_ui_dir")]
    pub dir: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { dir: default_ui_dir() }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 80 }
fn default_db_path() -> String { "data/graphs.db".into() }
fn default_tree() -> String { "graphs".into() }
fn default_ui_dir() -> String { "ui/build".into() }

/// Path of the TOML file, from `CONFIG_PATH` (default `config.toml`).
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content).with_context(|| format!("invalid config file {path}"))?;
    Ok(cfg)
}

impl AppConfig {
    /// File (if present) + environment overrides, normalized and validated.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Override fields from `PORT`, `HOST`, `GRAPHS_DB_PATH`, `GRAPHS_TREE`,
    /// `UI_DIR` and `TOKIO_WORKER_THREADS`, looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow!("PORT must be a number in 1..=65535, got {port:?}"))?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = threads.trim().parse().ok();
        }
        if let Some(path) = lookup("GRAPHS_DB_PATH") {
            self.storage.path = path;
        }
        if let Some(tree) = lookup("GRAPHS_TREE") {
            self.storage.tree = tree;
        }
        if let Some(dir) = lookup("UI_DIR") {
            self.ui.dir = dir;
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        if self.ui.dir.trim().is_empty() {
            self.ui.dir = default_ui_dir();
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("storage.path is empty; set it in config.toml or GRAPHS_DB_PATH"));
        }
        if self.tree.trim().is_empty() {
            return Err(anyhow!("storage.tree is empty"));
        }
        Ok(())
    }

    /// Directory that must exist before the database is opened.
    pub fn data_dir(&self) -> String {
        Path::new(&self.path)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl UiConfig {
    pub fn index_file(&self) -> PathBuf {
        Path::new(&self.dir).join("index.html")
    }
}
