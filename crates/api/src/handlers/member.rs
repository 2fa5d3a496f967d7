//! Handlers for workspace member management (`/workspaces/{id}/members`).
//!
//! All operations require an administering role (owner or admin) in the
//! addressed workspace and are scoped by workspace id in every query.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use kaizen_core::error::CoreError;
use kaizen_core::roles::WorkspaceRole;
use kaizen_core::types::DbId;
use kaizen_db::models::membership::{MemberWithProfile, Membership};
use kaizen_db::repositories::MembershipRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::workspace::require_workspace_admin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /workspaces/{id}/members/{member_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub role: String,
}

/// GET /api/v1/workspaces/{id}/members
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MemberWithProfile>>>> {
    require_workspace_admin(&state.pool, auth, workspace_id).await?;

    let members = MembershipRepo::list_for_workspace(&state.pool, workspace_id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// PUT /api/v1/workspaces/{id}/members/{member_id}
///
/// Change a member's workspace role. The new role must be in the
/// enumerated set; anything else is a 400.
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((workspace_id, member_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMemberRequest>,
) -> AppResult<Json<Membership>> {
    require_workspace_admin(&state.pool, auth, workspace_id).await?;

    let role = WorkspaceRole::parse(&input.role).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "'{}' is not a valid workspace role",
            input.role
        )))
    })?;

    let membership = MembershipRepo::update_role(&state.pool, member_id, workspace_id, role.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Membership",
            id: member_id,
        }))?;

    Ok(Json(membership))
}

/// DELETE /api/v1/workspaces/{id}/members/{member_id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((workspace_id, member_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    require_workspace_admin(&state.pool, auth, workspace_id).await?;

    let deleted = MembershipRepo::delete(&state.pool, member_id, workspace_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Membership",
            id: member_id,
        }))
    }
}
