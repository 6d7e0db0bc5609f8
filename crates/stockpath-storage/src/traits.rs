//! Repository trait definitions

use crate::error::StorageResult;
use async_trait::async_trait;
use stockpath_core::Warehouse;

/// Source of truth for the warehouse set.
///
/// All backends implement this trait. `get_all` returns every currently
/// active warehouse; the path service treats the result as the complete,
/// authoritative node set for a full graph rebuild.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// Fetch all active warehouses in one bulk call
    async fn get_all(&self) -> StorageResult<Vec<Warehouse>>;
}
