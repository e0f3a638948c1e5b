//! Board domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Patch;

/// Board domain entity.
///
/// A board belongs to exactly one user; its tasks inherit that ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub title: String,
    pub sorted: bool,
    pub owner_id: Uuid,
}

impl Board {
    /// Create a new board with a fresh id for the given owner
    pub fn new(title: String, sorted: bool, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            sorted,
            owner_id,
        }
    }
}

/// Board creation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBoard {
    pub title: Option<String>,
    #[serde(default)]
    pub sorted: bool,
}

/// Partial-update request for a board.
///
/// `sorted` is a primitive boolean and is always applied; there is no
/// "absent" state for it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub sorted: bool,
}

/// Board response shape.
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub id: Uuid,
    pub title: String,
    pub sorted: bool,
    pub owner_id: Uuid,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            sorted: board.sorted,
            owner_id: board.owner_id,
        }
    }
}
