//! Handlers for the `/todos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use taskdeck_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/todos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    let todo = TodoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/v1/todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(todos))
}

/// PUT /api/v1/todos/{id}
///
/// A present `completed` toggles status first; completing a recurring
/// todo spawns its next occurrence as part of that write. A present
/// `title` then replaces all detail fields (no recurrence side effect).
/// Either part may appear alone. Missing ids succeed silently.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<StatusCode> {
    if let Some(completed) = input.completed {
        TodoRepo::set_completed(&state.pool, id, completed).await?;
    }

    if let Some(title) = &input.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "title must not be empty".to_string(),
            )));
        }
        let details = CreateTodo {
            title: title.clone(),
            description: input.description.clone(),
            priority: input.priority,
            due_date: input.due_date,
            remind_at: input.remind_at,
            repeat: input.repeat,
            tags: input.tags.clone(),
            project_id: input.project_id,
        };
        TodoRepo::update_details(&state.pool, id, &details).await?;
    }

    Ok(StatusCode::OK)
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    TodoRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
