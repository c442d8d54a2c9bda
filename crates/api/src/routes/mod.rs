pub mod health;
pub mod project;
pub mod subtask;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos                       GET list, POST create
/// /todos/{id}                  PUT update, DELETE delete
/// /todos/{todo_id}/subtasks    GET list, POST create
/// /subtasks/{id}               PUT update, DELETE delete
/// /projects                    GET list, POST create
/// /projects/{id}               PUT update, DELETE delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/todos", todo::router())
        .nest("/subtasks", subtask::router())
        .nest("/projects", project::router())
}
