//! Concurrency-safe holder for the published graph snapshot

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::sync::{Arc, RwLock};
use tokio_util::sync::CancellationToken;

/// Holds the current graph snapshot.
///
/// A snapshot is immutable once published: rebuilds construct a brand-new
/// graph and swap the reference wholesale, so readers only ever observe a
/// fully built graph. Created once per process and injected wherever the
/// graph is read.
#[derive(Debug)]
pub struct GraphContext {
    graph: RwLock<Arc<Graph>>,
}

impl GraphContext {
    /// Create a context holding an empty snapshot. Queries against it
    /// resolve nothing until the first rebuild publishes a real graph.
    pub fn new() -> Self {
        Self {
            graph: RwLock::new(Arc::new(Graph::new())),
        }
    }

    /// Copy out the current snapshot reference.
    ///
    /// Fails with [`Error::Cancelled`] without touching the lock when the
    /// caller's token is already cancelled. The returned graph may be the
    /// empty snapshot; callers handle that, it is not an error.
    pub fn get(&self, cancel: &CancellationToken) -> Result<Arc<Graph>> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let guard = self.graph.read().map_err(|e| Error::Lock(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }

    /// Publish a freshly built graph, replacing the current snapshot.
    pub fn update(&self, graph: Graph) -> Result<()> {
        let mut guard = self.graph.write().map_err(|e| Error::Lock(e.to_string()))?;
        *guard = Arc::new(graph);
        Ok(())
    }
}

impl Default for GraphContext {
    fn default() -> Self {
        Self::new()
    }
}
