//! Service error types

use thiserror::Error;
use uuid::Uuid;

/// Path service error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("warehouse {0} is not present in the graph")]
    NotFound(Uuid),

    #[error(transparent)]
    Graph(#[from] stockpath_core::Error),

    #[error(transparent)]
    Repository(#[from] stockpath_storage::StorageError),
}
