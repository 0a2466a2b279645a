//! Scene entity types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::identity::{ObjectId, Timestamp};

/// Identity trait for anything the scene layer can queue for transmission.
///
/// The update queue uses `object_id()` for duplicate detection, so
/// implementations must return a stable identifier for the lifetime of the
/// entity.
pub trait SceneEntity {
    /// Get the unique identifier for this entity.
    fn object_id(&self) -> ObjectId;
}

impl<T: SceneEntity> SceneEntity for Arc<T> {
    fn object_id(&self) -> ObjectId {
        (**self).object_id()
    }
}

/// A single part of a scene object, the unit of state broadcast to viewers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePart {
    pub object_id: ObjectId,
    /// Region-local identifier used on the wire.
    pub local_id: u32,
    pub name: String,
    pub position: [f32; 3],
    pub updated_at: Timestamp,
}

impl SceneEntity for ScenePart {
    fn object_id(&self) -> ObjectId {
        self.object_id
    }
}
