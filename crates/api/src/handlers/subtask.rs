//! Handlers for subtasks, nested under their parent todo for creation
//! and listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_db::models::subtask::{CreateSubtask, Subtask, UpdateSubtask};
use taskdeck_db::repositories::SubtaskRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/todos/{todo_id}/subtasks
pub async fn create(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
    Json(input): Json<CreateSubtask>,
) -> AppResult<(StatusCode, Json<Subtask>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    let subtask = SubtaskRepo::create(&state.pool, todo_id, &input.title).await?;
    Ok((StatusCode::CREATED, Json(subtask)))
}

/// GET /api/v1/todos/{todo_id}/subtasks
pub async fn list_by_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<Json<Vec<Subtask>>> {
    let subtasks = SubtaskRepo::list_by_todo(&state.pool, todo_id).await?;
    Ok(Json(subtasks))
}

/// PUT /api/v1/subtasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubtask>,
) -> AppResult<StatusCode> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    SubtaskRepo::update(&state.pool, id, &input).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/v1/subtasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    SubtaskRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
