//! Subtask entity model and DTOs.
//!
//! A subtask's lifecycle is owned by its parent todo: created only under
//! an existing todo, removed with it via the cascade FK.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `subtasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subtask {
    pub id: DbId,
    pub todo_id: DbId,
    pub title: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a subtask under a todo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubtask {
    pub title: String,
}

/// DTO for updating a subtask. Full replace.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubtask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
