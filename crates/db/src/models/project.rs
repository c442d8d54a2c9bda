//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Hex color string, e.g. `#EF4444`.
    pub color: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
///
/// An empty `color` defaults to `#64748B` at write time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
}

/// DTO for updating a project. Full replace of the mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
}
