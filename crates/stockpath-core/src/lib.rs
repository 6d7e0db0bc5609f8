//! Stockpath Core - Graph engine for fulfillment path resolution
//!
//! This crate provides the warehouse graph model, the snapshot holder and
//! the reverse ancestor traversal used to answer fulfillment path queries.

pub mod context;
pub mod error;
pub mod graph;
pub mod node;
pub mod path;
pub mod traversal;
pub mod warehouse;

pub use context::GraphContext;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeIndex, Graph};
pub use node::Node;
pub use path::{Path, PathNode};
pub use traversal::PathFinder;
pub use warehouse::{TimeZone, Warehouse, WarehouseInfo, WarehouseKind};
