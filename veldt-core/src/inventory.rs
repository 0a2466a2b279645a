//! Inventory entity types.
//!
//! These are the values produced by the backing inventory service and
//! memoized by `veldt-cache`. The cache treats them as immutable: it stores
//! what callers hand it and never mutates a stored value.

use serde::{Deserialize, Serialize};

use crate::enums::FolderKind;
use crate::identity::{FolderId, ItemId, Timestamp, UserId};

/// A folder in a user's inventory tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryFolder {
    pub folder_id: FolderId,
    /// Parent folder; for the root folder this is the nil UUID.
    pub parent_id: FolderId,
    pub owner_id: UserId,
    pub name: String,
    pub kind: FolderKind,
    /// Service-side version counter, bumped when the folder's contents change.
    pub version: i32,
}

/// An item in a user's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_id: ItemId,
    /// The folder containing this item.
    pub folder_id: FolderId,
    pub owner_id: UserId,
    pub name: String,
    pub asset_id: uuid::Uuid,
    pub created_at: Timestamp,
    /// Service-defined metadata, opaque to this core.
    pub metadata: Option<serde_json::Value>,
}

/// A consistent point-in-time view of one user's entire inventory, as last
/// fetched from the backing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub owner_id: UserId,
    pub folders: Vec<InventoryFolder>,
    pub items: Vec<InventoryItem>,
}

impl InventorySnapshot {
    /// Create an empty snapshot for the given owner.
    pub fn new(owner_id: UserId) -> Self {
        Self {
            owner_id,
            folders: Vec::new(),
            items: Vec::new(),
        }
    }
}
