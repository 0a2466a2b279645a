//! Enumerated tags shared across the workspace.

use serde::{Deserialize, Serialize};

/// Asset/type tag identifying a well-known system folder in a user's
/// inventory. Each user has at most one system folder per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderKind {
    Animation,
    BodyPart,
    CallingCard,
    Clothing,
    Gesture,
    Landmark,
    LostAndFound,
    Notecard,
    Object,
    /// The root of the inventory tree.
    Root,
    Script,
    Sound,
    Texture,
    Trash,
}
