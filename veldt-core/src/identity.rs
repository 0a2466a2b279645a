//! Identity types for Veldt entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier of a user (agent) connected to the region.
pub type UserId = Uuid;

/// Identifier of an inventory folder.
pub type FolderId = Uuid;

/// Identifier of an inventory item.
pub type ItemId = Uuid;

/// Identifier of a scene object part.
pub type ObjectId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 identifier (timestamp-sortable).
pub fn new_entity_id() -> Uuid {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_id_is_v7() {
        let id = new_entity_id();
        assert_eq!(id.get_version_num(), 7);
    }

    #[test]
    fn test_entity_ids_are_sortable() {
        let id1 = new_entity_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = new_entity_id();
        assert!(id1.to_string() < id2.to_string());
    }
}
