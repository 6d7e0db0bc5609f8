//! Stockpath Server - path resolution service and HTTP API
//!
//! Ties the repository, the graph context and the path finder together:
//! graph rebuilds from repository data and path queries with the default
//! warehouse fallback, exposed over an HTTP/JSON surface.

pub mod error;
pub mod http;
pub mod service;

pub use error::ServiceError;
pub use service::PathService;
