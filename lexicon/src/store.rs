//! File-backed lexicon storage.
//!
//! The `JsonFileStore` reads a [`GraphSnapshot`] from a JSON file, validates
//! it, and serves it as the current graph until the next reload. A reload
//! that fails leaves the previously loaded graph in place.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{LexiconError, Result, StorageError};
use crate::graph::{GraphSnapshot, LexicalGraph};
use crate::provider::SnapshotProvider;

/// Lexicon stored as a single JSON document on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path of the JSON document.
    path: PathBuf,

    /// Last successfully loaded graph.
    current: RwLock<Option<Arc<LexicalGraph>>>,
}

impl JsonFileStore {
    /// Create a store for `path` without reading it.
    ///
    /// Until [`load`](Self::load) succeeds, [`snapshot`](SnapshotProvider::snapshot)
    /// reports the graph as unavailable.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            current: RwLock::new(None),
        }
    }

    /// Create a store and load it.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::new(path);
        store.load().await?;
        Ok(store)
    }

    /// Write `snapshot` to `path` and open a store over it.
    ///
    /// The snapshot is validated before anything is written.
    pub async fn seed(path: impl AsRef<Path>, snapshot: &GraphSnapshot) -> Result<Self> {
        let path = path.as_ref();
        snapshot.clone().into_graph()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::CreateDirectory(format!("{}: {e}", parent.display())))?;
        }

        let content = serde_json::to_string_pretty(snapshot)?;

        // Write atomically using a temp file
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)
            .await
            .map_err(|e| StorageError::WriteFile(format!("{}: {e}", temp_path.display())))?;
        fs::rename(&temp_path, path)
            .await
            .map_err(|e| StorageError::WriteFile(format!("{}: {e}", path.display())))?;

        info!(
            "Seeded lexicon at {} with {} items",
            path.display(),
            snapshot.nodes.len()
        );
        Self::open(path).await
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a graph has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.read().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Read and validate the backing file, replacing the current graph.
    pub async fn load(&self) -> Result<()> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::ReadFile(format!("{}: {e}", self.path.display())))?;

        let snapshot: GraphSnapshot = serde_json::from_str(&content)?;
        let graph = snapshot.into_graph()?;

        info!(
            "Loaded lexicon from {}: {} items, {} edges",
            self.path.display(),
            graph.len(),
            graph.edges().len()
        );

        let mut current = self.current.write().map_err(|_| {
            LexiconError::GraphUnavailable(format!("{}: lock poisoned", self.path.display()))
        })?;
        *current = Some(Arc::new(graph));
        Ok(())
    }

    /// Reload the backing file, keeping the previous graph on failure.
    pub async fn reload(&self) -> Result<()> {
        match self.load().await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    "Failed to reload lexicon {}: {e}; keeping previous graph",
                    self.path.display()
                );
                Err(e)
            }
        }
    }
}

impl SnapshotProvider for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn snapshot(&self) -> Result<Arc<LexicalGraph>> {
        let current = self.current.read().map_err(|_| {
            LexiconError::GraphUnavailable(format!("{}: lock poisoned", self.path.display()))
        })?;

        match current.as_ref() {
            Some(graph) => {
                debug!("Serving lexicon snapshot from {}", self.path.display());
                Ok(Arc::clone(graph))
            }
            None => Err(LexiconError::GraphUnavailable(format!(
                "{} has not been loaded",
                self.path.display()
            ))),
        }
    }
}
