//! Graph node payload

use crate::warehouse::{Warehouse, WarehouseKind};
use uuid::Uuid;

/// A warehouse as represented in the graph.
///
/// Identity is the id; every other field is descriptive payload carried
/// through to query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: Uuid,
    pub kind: WarehouseKind,
    pub name: String,
    pub code: String,
    pub address: String,
    pub descriptor_group: String,
    pub time_zone: Option<String>,
    pub available_for_balance: bool,
    pub only_stock_pickup_allowed: bool,
}

impl Node {
    /// Project a warehouse row into its graph node
    pub fn from_warehouse(warehouse: &Warehouse) -> Self {
        let (address, descriptor_group, time_zone) = match &warehouse.info {
            Some(info) => (
                info.address.clone(),
                info.descriptor_group.clone(),
                info.time_zone.as_ref().map(|tz| tz.code.clone()),
            ),
            None => (String::new(), String::new(), None),
        };
        Self {
            id: warehouse.id,
            kind: warehouse.kind,
            name: warehouse.name.clone(),
            code: warehouse.code.clone(),
            address,
            descriptor_group,
            time_zone,
            available_for_balance: warehouse.available_for_balance,
            only_stock_pickup_allowed: warehouse.only_stock_pickup_allowed,
        }
    }
}
