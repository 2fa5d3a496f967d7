//! Route definitions for workspaces and member management.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{member, workspace};
use crate::state::AppState;

/// Routes mounted under `/workspaces`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workspaces", get(workspace::list).post(workspace::create))
        .route(
            "/workspaces/active",
            get(workspace::get_active).put(workspace::set_active),
        )
        .route("/workspaces/{id}/members", get(member::list))
        .route(
            "/workspaces/{id}/members/{member_id}",
            put(member::update_role).delete(member::remove),
        )
}
