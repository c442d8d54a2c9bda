//! Repository for the `todos` table.
//!
//! `set_completed` owns the completion transition: marking a recurring
//! todo done also inserts its next occurrence, inside one transaction,
//! so callers never orchestrate recurrence themselves.

use std::collections::HashMap;

use sqlx::SqlitePool;
use taskdeck_core::recurrence::next_occurrence;
use taskdeck_core::types::{DbId, Timestamp};

use crate::models::subtask::Subtask;
use crate::models::todo::{CreateTodo, DueReminder, Todo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, priority, due_date, remind_at, \
                       repeat, tags, project_id, created_at";

/// Serialize tags for the TEXT column. The column is NOT NULL with a
/// `'[]'` default, so an empty list goes in as `[]`, never NULL.
fn tags_json(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| String::from("[]"))
}

/// Provides CRUD operations for todos, plus the reminder-window query
/// used by the background scheduler.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new pending todo, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, completed, priority, due_date, remind_at, repeat, tags, project_id)
             VALUES (?, ?, 0, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.as_str())
            .bind(input.due_date)
            .bind(input.remind_at)
            .bind(input.repeat.as_str())
            .bind(tags_json(&input.tags))
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// List all todos, newest first, each with its subtasks attached.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        let mut todos = sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await?;

        let subtasks = sqlx::query_as::<_, Subtask>(
            "SELECT id, todo_id, title, completed, created_at FROM subtasks
             ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await?;

        let mut by_todo: HashMap<DbId, Vec<Subtask>> = HashMap::new();
        for subtask in subtasks {
            by_todo.entry(subtask.todo_id).or_default().push(subtask);
        }
        for todo in &mut todos {
            if let Some(children) = by_todo.remove(&todo.id) {
                todo.subtasks = children;
            }
        }
        Ok(todos)
    }

    /// Set the completed flag.
    ///
    /// Completing a todo whose repeat rule is set spawns its successor:
    /// a fresh pending row with the same title/description/priority/
    /// rule/tags/project and due/remind dates projected forward. The
    /// original row stays completed and untouched. Both writes commit in
    /// one transaction, and the spawn fires only on the false -> true
    /// edge, so re-completing cannot double-spawn.
    ///
    /// A missing id is a silent no-op. Un-completing is a plain field
    /// write with no side effect.
    pub async fn set_completed(
        pool: &SqlitePool,
        id: DbId,
        completed: bool,
    ) -> Result<(), sqlx::Error> {
        if !completed {
            sqlx::query("UPDATE todos SET completed = 0 WHERE id = ?")
                .bind(id)
                .execute(pool)
                .await?;
            return Ok(());
        }

        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        let row = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(todo) = row else {
            // Row vanished: the complete call still reports success.
            return tx.commit().await;
        };

        sqlx::query("UPDATE todos SET completed = 1 WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if !todo.completed && todo.repeat.is_recurring() {
            let next_due = next_occurrence(todo.due_date, todo.repeat);
            let next_remind = next_occurrence(todo.remind_at, todo.repeat);

            sqlx::query(
                "INSERT INTO todos (title, description, completed, priority, due_date, remind_at, repeat, tags, project_id)
                 VALUES (?, ?, 0, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.priority.as_str())
            .bind(next_due)
            .bind(next_remind)
            .bind(todo.repeat.as_str())
            .bind(tags_json(&todo.tags))
            .bind(todo.project_id)
            .execute(&mut *tx)
            .await?;

            tracing::debug!(todo_id = id, rule = todo.repeat.as_str(), "Spawned next occurrence");
        }

        tx.commit().await
    }

    /// Full replace of the mutable fields. No recurrence side effect;
    /// a missing id is a silent no-op.
    pub async fn update_details(
        pool: &SqlitePool,
        id: DbId,
        input: &CreateTodo,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE todos SET title = ?, description = ?, priority = ?, due_date = ?,
                              remind_at = ?, repeat = ?, tags = ?, project_id = ?
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.priority.as_str())
        .bind(input.due_date)
        .bind(input.remind_at)
        .bind(input.repeat.as_str())
        .bind(tags_json(&input.tags))
        .bind(input.project_id)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a todo. Subtasks cascade via the FK; missing ids no-op.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Pending todos whose reminder falls in the half-open window
    /// `[start, end)`.
    pub async fn due_reminders(
        pool: &SqlitePool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<DueReminder>, sqlx::Error> {
        sqlx::query_as::<_, DueReminder>(
            "SELECT title, description FROM todos
             WHERE completed = 0 AND remind_at >= ? AND remind_at < ?",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }
}
