//! SQLite warehouse repository

use crate::error::{StorageError, StorageResult};
use crate::traits::WarehouseRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;
use stockpath_core::Warehouse;

/// SQLite-backed warehouse repository.
///
/// Rows are stored as JSON documents alongside the columns the repository
/// filters on, so schema churn in the descriptive payload never needs a
/// migration.
pub struct SqliteRepository {
    conn: Mutex<Connection>,
}

impl SqliteRepository {
    /// Open or create a database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = Connection::open(path).map_err(|e| StorageError::Database(e.to_string()))?;

        let repository = Self {
            conn: Mutex::new(conn),
        };
        repository.init_tables()?;

        Ok(repository)
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> StorageResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StorageError::Database(e.to_string()))?;

        let repository = Self {
            conn: Mutex::new(conn),
        };
        repository.init_tables()?;

        Ok(repository)
    }

    fn init_tables(&self) -> StorageResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS warehouses (
                id TEXT PRIMARY KEY,
                is_active INTEGER NOT NULL,
                data TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_warehouses_active ON warehouses(is_active);
            "#,
        )
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }

    /// Insert or replace a warehouse row. Used for seeding and imports;
    /// the serving path only reads.
    pub fn save(&self, warehouse: &Warehouse) -> StorageResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        let data = serde_json::to_string(warehouse)?;

        conn.execute(
            "INSERT OR REPLACE INTO warehouses (id, is_active, data) VALUES (?1, ?2, ?3)",
            params![warehouse.id.to_string(), warehouse.is_active, data],
        )
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl WarehouseRepository for SqliteRepository {
    async fn get_all(&self) -> StorageResult<Vec<Warehouse>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT data FROM warehouses WHERE is_active = 1")
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                let data: String = row.get(0)?;
                Ok(data)
            })
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let mut warehouses = Vec::new();
        for row in rows {
            let data = row.map_err(|e| StorageError::Database(e.to_string()))?;
            let warehouse: Warehouse = serde_json::from_str(&data)?;
            warehouses.push(warehouse);
        }

        Ok(warehouses)
    }
}
