//! Workspace membership model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use kaizen_core::types::{DbId, Timestamp};

/// A row from the `workspace_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Membership {
    pub id: DbId,
    pub workspace_id: DbId,
    pub user_id: DbId,
    /// Stored role string; parse via `WorkspaceRole::parse` (fail closed).
    pub role: String,
    pub created_at: Timestamp,
}

/// A membership joined with its workspace name, as returned by
/// `MembershipRepo::list_for_user` and the active-workspace resolver.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MembershipWithWorkspace {
    pub id: DbId,
    pub workspace_id: DbId,
    pub workspace_name: String,
    pub user_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
}

/// A membership joined with the member's profile, for the workspace
/// member-management view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberWithProfile {
    pub id: DbId,
    pub workspace_id: DbId,
    pub user_id: DbId,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub created_at: Timestamp,
}
