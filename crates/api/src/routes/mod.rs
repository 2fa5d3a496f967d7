pub mod auth;
pub mod health;
pub mod invite;
pub mod project;
pub mod todo;
pub mod workspace;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   sign-up (public)
/// /auth/login                                      sign-in (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     sign-out (requires auth)
/// /auth/me                                         current user (requires auth)
///
/// /workspaces                                      list memberships, create
/// /workspaces/active                               get, set active workspace
/// /workspaces/{id}/members                         list (admin)
/// /workspaces/{id}/members/{member_id}             update role, remove (admin)
/// /workspaces/{id}/invites                         list, create (admin)
/// /workspaces/{id}/invites/{invite_id}/revoke      revoke (admin)
/// /invites/accept                                  accept by token
///
/// /projects                                        list, create (active workspace)
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/members                           grant project role
/// /projects/{id}/todos                             list, create
/// /todos/{id}                                      update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(workspace::router())
        .merge(invite::router())
        .merge(project::router())
        .merge(todo::router())
}
