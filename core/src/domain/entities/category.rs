//! Board category entity. Schools are categories nested under the school-boards group.

use serde::{Deserialize, Serialize};

/// A board category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier (doubles as the school id for school boards)
    pub id: i64,
    /// URL slug, e.g. "konkuk"
    pub slug: String,
    /// Display name
    pub name: String,
    /// Parent category, if nested
    pub parent_id: Option<i64>,
    /// Whether only signed-in users may enter
    pub requires_auth: bool,
}

impl Category {
    /// The subset of fields the access gate decides on
    pub fn board_descriptor(&self) -> BoardDescriptor {
        BoardDescriptor {
            id: self.id,
            parent_id: self.parent_id,
            requires_auth: self.requires_auth,
        }
    }
}

/// Access-relevant description of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescriptor {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub requires_auth: bool,
}
