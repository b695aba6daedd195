use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use models::Graph;
use tracing::debug;

use super::GraphStore;
use crate::errors::ServiceError;

/// Default tree ("bucket") holding graph records.
pub const DEFAULT_TREE: &str = "graphs";

/// Durable graph store on an embedded sled database.
///
/// Keys are the textual graph ids, values the JSON-encoded graph. Writes are
/// flushed before `put` returns. The record count is scanned once at open
/// and maintained on insert (`Tree::len` walks the whole tree).
#[derive(Clone)]
pub struct SledGraphStore {
    db: sled::Db,
    tree: sled::Tree,
    records: Arc<AtomicUsize>,
}

impl SledGraphStore {
    /// Open (or create) the database at `path` and its `tree_name` tree.
    pub fn open<P: AsRef<Path>>(path: P, tree_name: &str) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let db = sled::open(path)
            .map_err(|e| ServiceError::Storage(format!("failed to open {}: {e}", path.display())))?;
        Self::with_db(db, tree_name)
    }

    /// Throwaway database removed on drop.
    pub fn temporary(tree_name: &str) -> Result<Self, ServiceError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::with_db(db, tree_name)
    }

    fn with_db(db: sled::Db, tree_name: &str) -> Result<Self, ServiceError> {
        let tree = db.open_tree(tree_name)?;
        let records = tree.len();
        debug!(tree = tree_name, records, "graph tree opened");
        Ok(Self { db, tree, records: Arc::new(AtomicUsize::new(records)) })
    }

    /// Persist everything buffered so far.
    pub async fn flush(&self) -> Result<(), ServiceError> {
        self.db.flush_async().await?;
        Ok(())
    }
}

#[async_trait]
impl GraphStore for SledGraphStore {
    async fn put(&self, id: &str, graph: &Graph) -> Result<(), ServiceError> {
        let value = graph.to_json_vec()?;
        if self.tree.insert(id.as_bytes(), value)?.is_none() {
            self.records.fetch_add(1, Ordering::Relaxed);
        }
        self.tree.flush_async().await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Graph>, ServiceError> {
        match self.tree.get(id.as_bytes())? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| ServiceError::Serialization(format!("record {id}: {e}"))),
            None => Ok(None),
        }
    }

    async fn len(&self) -> Result<usize, ServiceError> {
        Ok(self.records.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Edge, Node};

    fn sample(id: &str) -> Graph {
        Graph {
            id: id.into(),
            name: "sample".into(),
            nodes: vec![
                Node { id: "a".into(), name: "A".into() },
                Node { id: "b".into(), name: String::new() },
            ],
            edges: vec![Edge {
                id: "e1".into(),
                name: "a to b".into(),
                source: "a".into(),
                target: "b".into(),
            }],
        }
    }

    #[tokio::test]
    async fn put_get_and_overwrite() -> Result<(), anyhow::Error> {
        let store = SledGraphStore::temporary(DEFAULT_TREE)?;
        assert_eq!(store.len().await?, 0);
        assert!(store.get("missing").await?.is_none());

        store.put("g1", &sample("g1")).await?;
        assert_eq!(store.get("g1").await?, Some(sample("g1")));

        let mut renamed = sample("g1");
        renamed.name = "renamed".into();
        store.put("g1", &renamed).await?;
        assert_eq!(store.get("g1").await?.map(|g| g.name), Some("renamed".to_string()));
        assert_eq!(store.len().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn records_survive_reopen() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("graphs.db");
        {
            let store = SledGraphStore::open(&path, DEFAULT_TREE)?;
            store.put("g1", &sample("g1")).await?;
            store.flush().await?;
        }
        let reopened = SledGraphStore::open(&path, DEFAULT_TREE)?;
        assert_eq!(reopened.get("g1").await?, Some(sample("g1")));
        assert_eq!(reopened.len().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn count_tracks_new_keys_and_matches_tree() -> Result<(), anyhow::Error> {
        let store = SledGraphStore::temporary(DEFAULT_TREE)?;
        let shared = store.clone();
        for i in 0..20 {
            store.put(&format!("g{i}"), &sample("g")).await?;
        }
        store.put("g0", &sample("again")).await?;
        assert_eq!(store.len().await?, 20);
        assert_eq!(shared.len().await?, 20);
        assert_eq!(store.tree.len(), 20);
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_record_is_a_serialization_error() -> Result<(), anyhow::Error> {
        let store = SledGraphStore::temporary(DEFAULT_TREE)?;
        store.tree.insert("bad", &b"{not json"[..])?;
        assert!(matches!(store.get("bad").await, Err(ServiceError::Serialization(_))));
        Ok(())
    }

    #[tokio::test]
    async fn trees_are_isolated() -> Result<(), anyhow::Error> {
        let store = SledGraphStore::temporary(DEFAULT_TREE)?;
        let other = SledGraphStore::with_db(store.db.clone(), "other")?;
        store.put("g1", &sample("g1")).await?;
        assert!(other.get("g1").await?.is_none());
        Ok(())
    }
}
