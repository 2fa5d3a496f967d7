//! Handlers for the `/projects` resource.
//!
//! Listing and lookup are always scoped to the caller's active workspace;
//! mutations go through the access evaluator. Stakeholders can read and
//! propose, never edit.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kaizen_core::access::can_edit_project;
use kaizen_core::error::CoreError;
use kaizen_core::project::new_project_disposition;
use kaizen_core::roles::ProjectRole;
use kaizen_core::types::DbId;
use kaizen_db::models::project::{CreateProject, CreateProjectRequest, Project, UpdateProject};
use kaizen_db::models::project_member::{CreateProjectMemberRequest, ProjectMember};
use kaizen_db::repositories::{MembershipRepo, ProjectMemberRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::workspace::ActiveWorkspace;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Create a project in the active workspace. The creator's workspace role
/// decides the initial shape: stakeholders submit `proposed` projects with
/// no owner, everyone else gets an `active` project they own plus a
/// project-owner membership row.
pub async fn create(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must not be empty".into(),
        )));
    }
    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let disposition = new_project_disposition(ws.role, ws.user.user_id);

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            workspace_id: ws.workspace_id,
            name: name.to_string(),
            description,
            status: disposition.status.as_str().to_string(),
            owner_id: disposition.owner_id,
            created_by: ws.user.user_id,
        },
        disposition.grant_creator_membership,
    )
    .await?;

    tracing::info!(
        project_id = project.id,
        workspace_id = ws.workspace_id,
        status = %project.status,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// List the active workspace's projects, newest first.
pub async fn list(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_for_workspace(&state.pool, ws.workspace_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = load_scoped(&state, &ws, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = load_scoped(&state, &ws, id).await?;
    require_edit(&state, &ws, &project).await?;

    if let Some(status) = &input.status {
        if kaizen_core::project::ProjectStatus::parse(status).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{status}' is not a valid project status"
            ))));
        }
    }

    let updated = ProjectRepo::update(&state.pool, id, ws.workspace_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let project = load_scoped(&state, &ws, id).await?;
    require_edit(&state, &ws, &project).await?;

    ProjectRepo::delete(&state.pool, id, ws.workspace_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/members
///
/// Grant a workspace member a project-level role (`owner`, `editor`, or
/// `viewer`). This is how non-admin members without project ownership gain
/// edit rights. Requires edit rights on the project; the grantee must
/// already belong to the workspace. A repeated grant conflicts on the
/// (project, user) unique constraint.
pub async fn add_member(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProjectMemberRequest>,
) -> AppResult<(StatusCode, Json<ProjectMember>)> {
    let project = load_scoped(&state, &ws, id).await?;
    require_edit(&state, &ws, &project).await?;

    let role = ProjectRole::parse(&input.role).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "'{}' is not a valid project role",
            input.role
        )))
    })?;

    MembershipRepo::find_for_user_in_workspace(&state.pool, input.user_id, ws.workspace_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Grantee is not a member of this workspace".into(),
            ))
        })?;

    let member =
        ProjectMemberRepo::create(&state.pool, project.id, input.user_id, role.as_str()).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

// ---------------------------------------------------------------------------
// Helpers (shared with the todo handlers)
// ---------------------------------------------------------------------------

/// Fetch a project by id within the caller's active workspace. A project
/// in another workspace is reported as not found.
pub(crate) async fn load_scoped(
    state: &AppState,
    ws: &ActiveWorkspace,
    id: DbId,
) -> AppResult<Project> {
    ProjectRepo::find_in_workspace(&state.pool, id, ws.workspace_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Enforce the edit decision for a project: workspace role, project
/// ownership, and project-level role, evaluated fail-closed.
pub(crate) async fn require_edit(
    state: &AppState,
    ws: &ActiveWorkspace,
    project: &Project,
) -> AppResult<()> {
    let project_role = ProjectMemberRepo::find_for_user(&state.pool, project.id, ws.user.user_id)
        .await?
        .and_then(|pm| ProjectRole::parse(&pm.role));

    if !can_edit_project(Some(ws.role), project.owner_id, ws.user.user_id, project_role) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have edit rights on this project".into(),
        )));
    }
    Ok(())
}
