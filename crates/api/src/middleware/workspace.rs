//! Workspace-scoped authorization extractors and guards.
//!
//! Roles live per workspace, so they cannot be baked into the JWT; each
//! extractor resolves the caller's membership from the database and parses
//! the stored role fail-closed. Handlers then consult
//! `kaizen_core::access` for the actual decision.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::PgPool;
use kaizen_core::access::can_administer;
use kaizen_core::error::CoreError;
use kaizen_core::roles::WorkspaceRole;
use kaizen_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The caller's resolved active workspace: the persisted preference when
/// still valid, else the earliest-joined membership.
///
/// Rejects with 403 `NO_WORKSPACE` when the user belongs to no workspace,
/// and 403 when the stored role string is outside the enumerated set.
#[derive(Debug, Clone)]
pub struct ActiveWorkspace {
    pub user: AuthUser,
    pub workspace_id: DbId,
    pub workspace_name: String,
    pub role: WorkspaceRole,
}

impl FromRequestParts<AppState> for ActiveWorkspace {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let membership = kaizen_db::repositories::MembershipRepo::resolve_active(
            &state.pool,
            user.user_id,
        )
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NoWorkspace(
                "You are not a member of any workspace".into(),
            ))
        })?;

        let role = parse_role(&membership.role)?;

        Ok(ActiveWorkspace {
            user,
            workspace_id: membership.workspace_id,
            workspace_name: membership.workspace_name,
            role,
        })
    }
}

/// Load the caller's membership in an explicitly addressed workspace and
/// require an administering role (owner or admin).
///
/// Used by the member/invite management handlers, which operate on
/// `/workspaces/{id}/...` rather than the active workspace.
pub async fn require_workspace_admin(
    pool: &PgPool,
    user: AuthUser,
    workspace_id: DbId,
) -> Result<WorkspaceRole, AppError> {
    let membership = kaizen_db::repositories::MembershipRepo::find_for_user_in_workspace(
        pool,
        user.user_id,
        workspace_id,
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Forbidden(
            "You are not a member of this workspace".into(),
        ))
    })?;

    let role = parse_role(&membership.role)?;
    if !can_administer(role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Owner or admin role required".into(),
        )));
    }
    Ok(role)
}

/// Parse a stored role string, failing closed on anything unrecognized.
fn parse_role(role: &str) -> Result<WorkspaceRole, AppError> {
    WorkspaceRole::parse(role).ok_or_else(|| {
        tracing::error!(role, "Unrecognized workspace role in storage");
        AppError::Core(CoreError::Forbidden("Unrecognized workspace role".into()))
    })
}
