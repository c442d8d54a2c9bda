//! Repository for the `subtasks` table.

use sqlx::SqlitePool;
use taskdeck_core::types::DbId;

use crate::models::subtask::{Subtask, UpdateSubtask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, todo_id, title, completed, created_at";

/// Provides CRUD operations for subtasks.
pub struct SubtaskRepo;

impl SubtaskRepo {
    /// Insert a subtask under a todo, returning the created row.
    ///
    /// The FK rejects a `todo_id` with no parent row.
    pub async fn create(
        pool: &SqlitePool,
        todo_id: DbId,
        title: &str,
    ) -> Result<Subtask, sqlx::Error> {
        let query = format!(
            "INSERT INTO subtasks (todo_id, title)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subtask>(&query)
            .bind(todo_id)
            .bind(title)
            .fetch_one(pool)
            .await
    }

    /// List a todo's subtasks, oldest first.
    pub async fn list_by_todo(pool: &SqlitePool, todo_id: DbId) -> Result<Vec<Subtask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subtasks WHERE todo_id = ? ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Subtask>(&query)
            .bind(todo_id)
            .fetch_all(pool)
            .await
    }

    /// Full replace of title and completed. Missing ids no-op.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSubtask,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE subtasks SET title = ?, completed = ? WHERE id = ?")
            .bind(&input.title)
            .bind(input.completed)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a subtask. Missing ids no-op.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM subtasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
