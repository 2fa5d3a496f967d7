//! Handlers for todos, nested under their project.
//!
//! Reads are open to every workspace member (stakeholders included);
//! mutations require edit rights on the owning project. Todo lookups by id
//! are re-anchored to the project and its workspace, so a todo outside the
//! caller's active workspace is simply not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kaizen_core::error::CoreError;
use kaizen_core::types::DbId;
use kaizen_db::models::todo::{CreateTodoRequest, Todo, UpdateTodo};
use kaizen_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::{load_scoped, require_edit};
use crate::middleware::workspace::ActiveWorkspace;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/todos
pub async fn list(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Todo>>>> {
    // Read access: membership in the workspace is enough.
    load_scoped(&state, &ws, project_id).await?;

    let todos = TodoRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: todos }))
}

/// POST /api/v1/projects/{id}/todos
pub async fn create(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let project = load_scoped(&state, &ws, project_id).await?;
    require_edit(&state, &ws, &project).await?;

    let title = input.title.trim();
    if title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Todo title must not be empty".into(),
        )));
    }

    let todo = TodoRepo::create(&state.pool, project_id, title, ws.user.user_id).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /api/v1/todos/{id}
pub async fn update(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let todo = load_todo_scoped(&state, &ws, id).await?;

    if let Some(title) = &input.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Todo title must not be empty".into(),
            )));
        }
    }

    let updated = TodoRepo::update(&state.pool, todo.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    ws: ActiveWorkspace,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let todo = load_todo_scoped(&state, &ws, id).await?;

    TodoRepo::delete(&state.pool, todo.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Load a todo, verify its project belongs to the active workspace, and
/// enforce edit rights on that project.
async fn load_todo_scoped(state: &AppState, ws: &ActiveWorkspace, id: DbId) -> AppResult<Todo> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    let project = load_scoped(state, ws, todo.project_id).await?;
    require_edit(state, ws, &project).await?;
    Ok(todo)
}
