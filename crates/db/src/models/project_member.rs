//! Project membership model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kaizen_core::types::{DbId, Timestamp};

/// A row from the `project_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    /// Stored role string; parse via `ProjectRole::parse` (fail closed).
    pub role: String,
    pub created_at: Timestamp,
}

/// Request body for granting a project role (`POST /projects/{id}/members`).
#[derive(Debug, Deserialize)]
pub struct CreateProjectMemberRequest {
    pub user_id: DbId,
    pub role: String,
}
