//! Error types for Stockpath Core

use thiserror::Error;

/// Result type alias using Stockpath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("operation cancelled")]
    Cancelled,

    #[error("Lock error: {0}")]
    Lock(String),
}
