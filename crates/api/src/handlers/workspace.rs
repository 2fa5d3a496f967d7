//! Handlers for the `/workspaces` resource: creation, membership listing,
//! and the active-workspace selection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use kaizen_core::error::CoreError;
use kaizen_core::types::DbId;
use kaizen_db::models::membership::MembershipWithWorkspace;
use kaizen_db::models::workspace::{CreateWorkspace, Workspace};
use kaizen_db::repositories::{MembershipRepo, UserRepo, WorkspaceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /workspaces/active`.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub workspace_id: DbId,
}

/// POST /api/v1/workspaces
///
/// Create a workspace; the caller becomes its owner atomically.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateWorkspace>,
) -> AppResult<(StatusCode, Json<Workspace>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Workspace name must not be empty".into(),
        )));
    }

    let workspace = WorkspaceRepo::create_with_owner(
        &state.pool,
        &CreateWorkspace {
            name: name.to_string(),
        },
        auth.user_id,
    )
    .await?;

    tracing::info!(workspace_id = workspace.id, user_id = auth.user_id, "Workspace created");
    Ok((StatusCode::CREATED, Json(workspace)))
}

/// GET /api/v1/workspaces
///
/// List the caller's workspace memberships, ordered by join date.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<MembershipWithWorkspace>>>> {
    let memberships = MembershipRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: memberships }))
}

/// GET /api/v1/workspaces/active
///
/// Resolve the caller's active workspace: the persisted preference when
/// still backed by a membership, else the earliest-joined workspace.
pub async fn get_active(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<MembershipWithWorkspace>>> {
    let membership = MembershipRepo::resolve_active(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NoWorkspace(
                "You are not a member of any workspace".into(),
            ))
        })?;
    Ok(Json(DataResponse { data: membership }))
}

/// PUT /api/v1/workspaces/active
///
/// Persist the caller's workspace preference. Fails with 403 if the caller
/// has no membership in the target workspace. Concurrent switches from two
/// sessions are last-write-wins; the field is a per-user preference, not
/// shared state.
pub async fn set_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<Json<DataResponse<MembershipWithWorkspace>>> {
    MembershipRepo::find_for_user_in_workspace(&state.pool, auth.user_id, input.workspace_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "You are not a member of this workspace".into(),
            ))
        })?;

    UserRepo::set_active_workspace(&state.pool, auth.user_id, input.workspace_id).await?;

    let membership = MembershipRepo::resolve_active(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::InternalError("Active workspace vanished after set".into()))?;

    tracing::debug!(
        user_id = auth.user_id,
        workspace_id = input.workspace_id,
        "Active workspace switched"
    );
    Ok(Json(DataResponse { data: membership }))
}
