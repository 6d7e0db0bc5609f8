//! Path service orchestration

use crate::error::ServiceError;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use stockpath_core::{Graph, GraphContext, Node, Path, PathFinder, Warehouse};
use stockpath_storage::WarehouseRepository;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Orchestrates graph rebuilds and path queries.
///
/// One instance per process; any number of query handlers may call
/// [`PathService::get_path`] concurrently with a rebuild.
pub struct PathService<R> {
    repository: Arc<R>,
    graph: Arc<GraphContext>,
}

impl<R: WarehouseRepository> PathService<R> {
    pub fn new(repository: Arc<R>, graph: Arc<GraphContext>) -> Self {
        Self { repository, graph }
    }

    /// Rebuild the warehouse graph from the repository and publish it.
    ///
    /// The fetched set is authoritative: every active warehouse becomes a
    /// node, sender/recipient references become edges. A reference to an
    /// id outside the fetched set is a recoverable data-integrity gap: the
    /// edge is skipped with a warning, the node stays. Repository errors
    /// abort the rebuild and leave the previous snapshot in place.
    pub async fn update_graph(&self) -> Result<(), ServiceError> {
        tracing::info!("rebuilding warehouse graph");
        let started = Instant::now();

        let warehouses = self.repository.get_all().await?;

        let lookup: HashMap<Uuid, &Warehouse> =
            warehouses.iter().map(|w| (w.id, w)).collect();

        let mut graph = Graph::new();
        for warehouse in &warehouses {
            let node = Arc::new(Node::from_warehouse(warehouse));
            graph.add_node(Arc::clone(&node));

            if let Some(sender_id) = warehouse.sender_id {
                match lookup.get(&sender_id) {
                    Some(sender_warehouse) => {
                        let sender = Arc::new(Node::from_warehouse(sender_warehouse));
                        graph.add_node(Arc::clone(&sender));
                        graph.add_edge(&sender, &node, 0);
                        tracing::debug!(
                            "{} sends to {}",
                            sender_warehouse.name,
                            warehouse.name
                        );
                    }
                    None => {
                        tracing::warn!(
                            sender_id = %sender_id,
                            warehouse = %warehouse.name,
                            "sender not found, skipping edge"
                        );
                    }
                }
            }

            if let Some(recipient_id) = warehouse.recipient_id {
                match lookup.get(&recipient_id) {
                    Some(recipient_warehouse) => {
                        let recipient = Arc::new(Node::from_warehouse(recipient_warehouse));
                        graph.add_node(Arc::clone(&recipient));
                        graph.add_edge(&node, &recipient, 0);
                        tracing::debug!(
                            "{} sends to {}",
                            warehouse.name,
                            recipient_warehouse.name
                        );
                    }
                    None => {
                        tracing::warn!(
                            recipient_id = %recipient_id,
                            warehouse = %warehouse.name,
                            "recipient not found, skipping edge"
                        );
                    }
                }
            }
        }

        self.graph.update(graph)?;
        tracing::info!(
            elapsed = ?started.elapsed(),
            warehouses = warehouses.len(),
            "warehouse graph rebuilt"
        );
        Ok(())
    }

    /// Resolve the fulfillment path for `destination`.
    ///
    /// When the resulting chain does not include `default_warehouse`, the
    /// path is recomputed from the default warehouse instead, replacing the
    /// primary result. Both ids must resolve against the current snapshot.
    pub fn get_path(
        &self,
        destination: &Uuid,
        default_warehouse: &Uuid,
        cancel: &CancellationToken,
    ) -> Result<Path, ServiceError> {
        let graph = self.graph.get(cancel)?;

        let node = graph
            .find(destination)
            .ok_or(ServiceError::NotFound(*destination))?;
        let mut path = PathFinder::find(&graph, &node);

        if !path.contains(default_warehouse) {
            let fallback = graph
                .find(default_warehouse)
                .ok_or(ServiceError::NotFound(*default_warehouse))?;
            path = PathFinder::find(&graph, &fallback);
        }

        Ok(path)
    }
}
