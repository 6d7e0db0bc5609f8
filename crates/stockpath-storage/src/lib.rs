//! Stockpath Storage - Warehouse repository backends
//!
//! This crate defines the repository contract the path service rebuilds
//! the graph from, together with a SQLite implementation and an in-memory
//! implementation for tests.

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;
pub use traits::WarehouseRepository;
