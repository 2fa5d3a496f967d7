//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kaizen_core::types::{DbId, Timestamp};

/// A todo row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub is_done: bool,
    pub created_by: DbId,
    pub inserted_at: Timestamp,
}

/// Request body for todo creation.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

/// DTO for updating a todo. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub is_done: Option<bool>,
}
