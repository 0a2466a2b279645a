//! Veldt Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types - no business logic.

pub mod config;
pub mod enums;
pub mod error;
pub mod identity;
pub mod inventory;
pub mod scene;

pub use config::CacheTunables;
pub use enums::FolderKind;
pub use error::{ConfigError, VeldtError, VeldtResult};
pub use identity::{new_entity_id, FolderId, ItemId, ObjectId, Timestamp, UserId};
pub use inventory::{InventoryFolder, InventoryItem, InventorySnapshot};
pub use scene::{SceneEntity, ScenePart};
