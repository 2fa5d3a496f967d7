//! Route definitions for the invite lifecycle.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::invite;
use crate::state::AppState;

/// Invite routes: admin management under `/workspaces/{id}/invites`,
/// token acceptance at `/invites/accept`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces/{id}/invites",
            get(invite::list).post(invite::create),
        )
        .route(
            "/workspaces/{id}/invites/{invite_id}/revoke",
            post(invite::revoke),
        )
        .route("/invites/accept", post(invite::accept))
}
