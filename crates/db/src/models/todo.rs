//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::recurrence::RepeatRule;
use taskdeck_core::types::{DbId, Timestamp};

use crate::models::subtask::Subtask;

/// Task priority. Serialized lowercase; absent, empty or unknown input
/// falls back to `medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_owned()
    }
}

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub remind_at: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub repeat: RepeatRule,
    /// Stored as JSON text; always a valid (possibly empty) array.
    #[sqlx(json)]
    pub tags: Vec<String>,
    pub project_id: Option<DbId>,
    /// Derived, not a column: populated by a secondary query on list.
    #[sqlx(skip)]
    pub subtasks: Vec<Subtask>,
    pub created_at: Timestamp,
}

/// DTO for creating a todo; also the full-replace payload for
/// `TodoRepo::update_details`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub remind_at: Option<Timestamp>,
    #[serde(default)]
    pub repeat: RepeatRule,
    /// Absent tags normalize to an empty list, never NULL in storage.
    #[serde(default)]
    pub tags: Vec<String>,
    pub project_id: Option<DbId>,
}

/// DTO for `PUT /todos/{id}`.
///
/// `completed` present toggles status (completing a recurring todo
/// spawns its successor); `title` present replaces all detail fields.
/// Either part may appear alone.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodo {
    pub completed: Option<bool>,
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub remind_at: Option<Timestamp>,
    #[serde(default)]
    pub repeat: RepeatRule,
    #[serde(default)]
    pub tags: Vec<String>,
    pub project_id: Option<DbId>,
}

/// A due-reminder match: only what a notification needs.
#[derive(Debug, Clone, FromRow)]
pub struct DueReminder {
    pub title: String,
    pub description: String,
}
