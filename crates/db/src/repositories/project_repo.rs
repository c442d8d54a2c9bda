//! Repository for the `projects` table.

use sqlx::SqlitePool;
use taskdeck_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, color, created_at";

/// Color assigned when a project is created without one.
const DEFAULT_COLOR: &str = "#64748B";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// An empty `color` defaults to [`DEFAULT_COLOR`].
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let color = if input.color.trim().is_empty() {
            DEFAULT_COLOR
        } else {
            input.color.as_str()
        };
        let query = format!(
            "INSERT INTO projects (name, description, color)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(color)
            .fetch_one(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Full replace of name/description/color. Missing ids no-op.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE projects SET name = ?, description = ?, color = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a project. Todos referencing it keep existing with their
    /// `project_id` nulled by the FK. Missing ids no-op.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
