//! Route definitions for item-level subtask operations.

use axum::routing::put;
use axum::Router;

use crate::handlers::subtask;
use crate::state::AppState;

/// Routes mounted at `/subtasks`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(subtask::update).delete(subtask::delete))
}
