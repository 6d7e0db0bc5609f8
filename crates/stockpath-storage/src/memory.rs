//! In-memory warehouse repository for testing

use crate::error::{StorageError, StorageResult};
use crate::traits::WarehouseRepository;
use async_trait::async_trait;
use std::sync::RwLock;
use stockpath_core::Warehouse;

/// In-memory warehouse repository.
///
/// Useful for tests and local experiments; mirrors the repository contract
/// of the SQLite backend.
#[derive(Default)]
pub struct MemoryRepository {
    warehouses: RwLock<Vec<Warehouse>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with the given warehouses
    pub fn with_warehouses(warehouses: Vec<Warehouse>) -> Self {
        Self {
            warehouses: RwLock::new(warehouses),
        }
    }

    pub fn save(&self, warehouse: Warehouse) -> StorageResult<()> {
        let mut warehouses = self
            .warehouses
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        if let Some(existing) = warehouses.iter_mut().find(|w| w.id == warehouse.id) {
            *existing = warehouse;
        } else {
            warehouses.push(warehouse);
        }
        Ok(())
    }
}

#[async_trait]
impl WarehouseRepository for MemoryRepository {
    async fn get_all(&self) -> StorageResult<Vec<Warehouse>> {
        let warehouses = self
            .warehouses
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        Ok(warehouses.iter().filter(|w| w.is_active).cloned().collect())
    }
}
