//! Route definitions for todo mutations addressed by todo id.

use axum::routing::patch;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted at `/todos`.
pub fn router() -> Router<AppState> {
    Router::new().route("/todos/{id}", patch(todo::update).delete(todo::delete))
}
