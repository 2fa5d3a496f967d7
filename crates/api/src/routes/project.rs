//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, todo};
use crate::state::AppState;

/// Project routes, all scoped to the caller's active workspace.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/projects/{id}/members", post(project::add_member))
        .route("/projects/{id}/todos", get(todo::list).post(todo::create))
}
