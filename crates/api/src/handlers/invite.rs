//! Handlers for the invite lifecycle: create, list, revoke (workspace
//! admins) and accept (any authenticated user with the token).
//!
//! The invite token is returned in the creation response so the admin can
//! hand it over directly. A production deployment would deliver it
//! out-of-band by email instead; the acceptance path already treats it as
//! a single-use bearer secret with expiry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use kaizen_core::error::CoreError;
use kaizen_core::invite::{generate_token, validate_email, INVITE_TTL_DAYS};
use kaizen_core::roles::WorkspaceRole;
use kaizen_core::types::DbId;
use kaizen_db::models::invite::{AcceptInviteRequest, CreateInvite, CreateInviteRequest, Invite};
use kaizen_db::models::membership::Membership;
use kaizen_db::repositories::invite_repo::AcceptError;
use kaizen_db::repositories::InviteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::workspace::require_workspace_admin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/workspaces/{id}/invites
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<DbId>,
    Json(input): Json<CreateInviteRequest>,
) -> AppResult<(StatusCode, Json<Invite>)> {
    require_workspace_admin(&state.pool, auth, workspace_id).await?;

    let email = validate_email(&input.email)?;

    let role = WorkspaceRole::parse(&input.role).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "'{}' is not a valid workspace role",
            input.role
        )))
    })?;

    let invite = InviteRepo::create(
        &state.pool,
        &CreateInvite {
            workspace_id,
            email,
            role: role.as_str().to_string(),
            token: generate_token(),
            invited_by: auth.user_id,
            expires_at: Utc::now() + Duration::days(INVITE_TTL_DAYS),
        },
    )
    .await?;

    tracing::info!(
        invite_id = invite.id,
        workspace_id,
        role = %invite.role,
        "Invite created"
    );
    Ok((StatusCode::CREATED, Json(invite)))
}

/// GET /api/v1/workspaces/{id}/invites
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Invite>>>> {
    require_workspace_admin(&state.pool, auth, workspace_id).await?;

    let invites = InviteRepo::list_for_workspace(&state.pool, workspace_id).await?;
    Ok(Json(DataResponse { data: invites }))
}

/// POST /api/v1/workspaces/{id}/invites/{invite_id}/revoke
///
/// Revocation is only possible while the invite is `pending`; a terminal
/// invite yields 409.
pub async fn revoke(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((workspace_id, invite_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Invite>> {
    require_workspace_admin(&state.pool, auth, workspace_id).await?;

    match InviteRepo::revoke(&state.pool, invite_id, workspace_id).await? {
        Some(invite) => Ok(Json(invite)),
        None => {
            // Distinguish missing from already-terminal for the caller.
            match InviteRepo::find_by_id(&state.pool, invite_id).await? {
                Some(invite) if invite.workspace_id == workspace_id => {
                    Err(AppError::Core(CoreError::Conflict(format!(
                        "Invite is already {}",
                        invite.status
                    ))))
                }
                _ => Err(AppError::Core(CoreError::NotFound {
                    entity: "Invite",
                    id: invite_id,
                })),
            }
        }
    }
}

/// POST /api/v1/invites/accept
///
/// Consume an invite token and join its workspace. The repository performs
/// the status flip and membership insert in one transaction, so the token
/// is accepted at most once.
pub async fn accept(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<AcceptInviteRequest>,
) -> AppResult<(StatusCode, Json<Membership>)> {
    let token = input.token.trim();
    if token.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Invite token must not be empty".into(),
        )));
    }

    match InviteRepo::accept(&state.pool, token, auth.user_id).await? {
        Ok(membership) => {
            tracing::info!(
                user_id = auth.user_id,
                workspace_id = membership.workspace_id,
                "Invite accepted"
            );
            Ok((StatusCode::CREATED, Json(membership)))
        }
        Err(AcceptError::UnknownToken) => {
            Err(AppError::NotFound("No invite matches this token".into()))
        }
        Err(AcceptError::NotPending) => Err(AppError::Core(CoreError::Conflict(
            "Invite is no longer pending or has expired".into(),
        ))),
        Err(AcceptError::AlreadyMember) => Err(AppError::Core(CoreError::Conflict(
            "You are already a member of this workspace".into(),
        ))),
    }
}
