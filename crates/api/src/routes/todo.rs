//! Route definitions for the `/todos` resource.
//!
//! Subtask creation and listing nest under the parent todo; item-level
//! subtask routes live under `/subtasks` (see `routes::subtask`).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{subtask, todo};
use crate::state::AppState;

/// Routes mounted at `/todos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list).post(todo::create))
        .route("/{id}", put(todo::update).delete(todo::delete))
        .route(
            "/{todo_id}/subtasks",
            get(subtask::list_by_todo).post(subtask::create),
        )
}
