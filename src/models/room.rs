//! Room model.

use serde::{Deserialize, Serialize};

/// A room that hosts sessions.
///
/// Lab subjects may only be placed in lab rooms, and lecture subjects
/// only in lecture rooms — the flags must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier, e.g. `"LH-1"`.
    pub id: String,
    /// Whether this is a lab room.
    pub is_lab: bool,
}

impl Room {
    /// Creates a lecture room.
    pub fn lecture_hall(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_lab: false,
        }
    }

    /// Creates a lab room.
    pub fn lab(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_lab: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_kinds() {
        assert!(!Room::lecture_hall("LH-1").is_lab);
        assert!(Room::lab("LAB-1").is_lab);
    }
}
