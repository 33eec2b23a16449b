//! The menu catalog: dishes offered by the canteen.
//!
//! Prices are in minor currency units. Items are never deleted once created;
//! they are marked unavailable instead, so historical order snapshots keep
//! pointing at something meaningful.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A dish on the canteen menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: u64,
    /// Free-text category tag ("rice", "noodles", "drinks", ...).
    pub category: String,
    pub available: bool,
    /// Kitchen preparation time in minutes.
    pub preparation_minutes: u32,
}

/// Payload for adding a dish to the catalog. New dishes start available.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub preparation_minutes: u32,
}

/// Payload for editing a dish. `available: Some(false)` is the only
/// retirement path; there is no delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub available: Option<bool>,
    pub preparation_minutes: Option<u32>,
}
