//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kaizen_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub workspace_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Stored status string; parse via `ProjectStatus::parse`.
    pub status: String,
    /// `None` for stakeholder proposals awaiting adoption.
    pub owner_id: Option<DbId>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a project. Status and owner are decided by
/// `kaizen_core::project::new_project_disposition`, not by the caller.
#[derive(Debug)]
pub struct CreateProject {
    pub workspace_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub owner_id: Option<DbId>,
    pub created_by: DbId,
}

/// Request body for project creation.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub owner_id: Option<DbId>,
}
