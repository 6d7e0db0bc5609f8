//! Warehouse domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Warehouse role, mapped from the registry category code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseKind {
    Unrecognized,
    Free,
    Main,
    Central,
    Mall,
    Transit,
    Reservation,
    Loses,
    Marketing,
    Exposition,
    Partner,
    Partner2,
    Free2,
    Problem,
    Refund,
    Production,
    Recycling,
    Service,
    Material,
    Markdown,
    Buffer,
    Discount,
    CentralMainIntermediate,
    MainCentralIntermediate,
    CentralFreeIntermediate,
    FreeCentralIntermediate,
}

impl WarehouseKind {
    /// Map a registry category code to a warehouse role.
    ///
    /// Unknown codes map to [`WarehouseKind::Unrecognized`] rather than
    /// failing; a warehouse with an unknown category still participates in
    /// the graph.
    pub fn from_code(code: &str) -> Self {
        match code {
            "FREE" => Self::Free,
            "MAIN" => Self::Main,
            "CENTRAL" => Self::Central,
            "MALL" => Self::Mall,
            "TRANSIT" => Self::Transit,
            "RESERVATION" => Self::Reservation,
            "LOSES" => Self::Loses,
            "MARKETING" => Self::Marketing,
            "EXPOSITION" => Self::Exposition,
            "PARTNER" => Self::Partner,
            "PARTNER2" => Self::Partner2,
            "FREE2" => Self::Free2,
            "PROBLEM" => Self::Problem,
            "REFUND" => Self::Refund,
            "PRODUCTION" => Self::Production,
            "RECYCLING" => Self::Recycling,
            "SERVICE" => Self::Service,
            "MATERIAL" => Self::Material,
            "MARKDOWN" => Self::Markdown,
            "BUFFER" => Self::Buffer,
            "DISCOUNT" => Self::Discount,
            "CENTRAL_MAIN_INTERMEDIATE" => Self::CentralMainIntermediate,
            "MAIN_CENTRAL_INTERMEDIATE" => Self::MainCentralIntermediate,
            "CENTRAL_FREE_INTERMEDIATE" => Self::CentralFreeIntermediate,
            "FREE_CENTRAL_INTERMEDIATE" => Self::FreeCentralIntermediate,
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrecognized => "UNRECOGNIZED",
            Self::Free => "FREE",
            Self::Main => "MAIN",
            Self::Central => "CENTRAL",
            Self::Mall => "MALL",
            Self::Transit => "TRANSIT",
            Self::Reservation => "RESERVATION",
            Self::Loses => "LOSES",
            Self::Marketing => "MARKETING",
            Self::Exposition => "EXPOSITION",
            Self::Partner => "PARTNER",
            Self::Partner2 => "PARTNER2",
            Self::Free2 => "FREE2",
            Self::Problem => "PROBLEM",
            Self::Refund => "REFUND",
            Self::Production => "PRODUCTION",
            Self::Recycling => "RECYCLING",
            Self::Service => "SERVICE",
            Self::Material => "MATERIAL",
            Self::Markdown => "MARKDOWN",
            Self::Buffer => "BUFFER",
            Self::Discount => "DISCOUNT",
            Self::CentralMainIntermediate => "CENTRAL_MAIN_INTERMEDIATE",
            Self::MainCentralIntermediate => "MAIN_CENTRAL_INTERMEDIATE",
            Self::CentralFreeIntermediate => "CENTRAL_FREE_INTERMEDIATE",
            Self::FreeCentralIntermediate => "FREE_CENTRAL_INTERMEDIATE",
        }
    }
}

impl std::fmt::Display for WarehouseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time zone attached to a warehouse site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZone {
    pub id: Uuid,
    pub code: String,
}

/// Descriptive site metadata for a warehouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseInfo {
    pub id: Uuid,

    /// Registry code of the parent site record
    pub code: String,

    pub address: String,

    pub descriptor_group: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
}

/// A warehouse row as fetched from the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// Unique identifier
    pub id: Uuid,

    /// Registry code
    pub code: String,

    /// Human readable name
    pub name: String,

    pub is_active: bool,

    /// Role, mapped from the category code
    pub kind: WarehouseKind,

    pub available_for_balance: bool,

    pub only_stock_pickup_allowed: bool,

    /// Warehouse that supplies this one, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<Uuid>,

    /// Warehouse this one forwards to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<Uuid>,

    /// Optional site metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<WarehouseInfo>,
}

impl Warehouse {
    /// Create an active warehouse with no links
    pub fn new(id: Uuid, name: impl Into<String>, kind: WarehouseKind) -> Self {
        Self {
            id,
            code: String::new(),
            name: name.into(),
            is_active: true,
            kind,
            available_for_balance: false,
            only_stock_pickup_allowed: false,
            sender_id: None,
            recipient_id: None,
            info: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_sender(mut self, sender_id: Uuid) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    pub fn with_recipient(mut self, recipient_id: Uuid) -> Self {
        self.recipient_id = Some(recipient_id);
        self
    }

    pub fn with_info(mut self, info: WarehouseInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
