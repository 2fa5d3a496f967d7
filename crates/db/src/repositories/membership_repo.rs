//! Repository for the `workspace_members` table, including the
//! active-workspace resolver.

use sqlx::PgPool;
use kaizen_core::types::DbId;

use crate::models::membership::{MemberWithProfile, Membership, MembershipWithWorkspace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, workspace_id, user_id, role, created_at";

/// Joined column list for membership-with-workspace queries.
const JOINED_COLUMNS: &str = "m.id, m.workspace_id, w.name AS workspace_name, \
                               m.user_id, m.role, m.created_at";

/// Provides membership CRUD and workspace-context resolution.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Insert a membership row.
    ///
    /// Fails with a `uq_workspace_members_workspace_user` violation if the
    /// user already belongs to the workspace.
    pub async fn create(
        pool: &PgPool,
        workspace_id: DbId,
        user_id: DbId,
        role: &str,
    ) -> Result<Membership, sqlx::Error> {
        let query = format!(
            "INSERT INTO workspace_members (workspace_id, user_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(workspace_id)
            .bind(user_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Find a user's membership in a specific workspace.
    pub async fn find_for_user_in_workspace(
        pool: &PgPool,
        user_id: DbId,
        workspace_id: DbId,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workspace_members
             WHERE user_id = $1 AND workspace_id = $2"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(user_id)
            .bind(workspace_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's memberships joined with workspace names, ordered by
    /// when the user joined. The unique (workspace, user) constraint makes
    /// the list automatically deduplicated per workspace.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<MembershipWithWorkspace>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM workspace_members m
             JOIN workspaces w ON w.id = m.workspace_id
             WHERE m.user_id = $1
             ORDER BY m.created_at ASC"
        );
        sqlx::query_as::<_, MembershipWithWorkspace>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve the user's active workspace membership.
    ///
    /// Preference order: the membership matching `users.active_workspace_id`
    /// when that preference is set and still backed by a membership row,
    /// otherwise the earliest-joined membership, otherwise `None`.
    pub async fn resolve_active(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<MembershipWithWorkspace>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM workspace_members m
             JOIN workspaces w ON w.id = m.workspace_id
             JOIN users u ON u.id = m.user_id
             WHERE m.user_id = $1
             ORDER BY (m.workspace_id = u.active_workspace_id) DESC NULLS LAST,
                      m.created_at ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, MembershipWithWorkspace>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a workspace's members joined with user profiles, ordered by
    /// join date. Scoped by workspace id.
    pub async fn list_for_workspace(
        pool: &PgPool,
        workspace_id: DbId,
    ) -> Result<Vec<MemberWithProfile>, sqlx::Error> {
        sqlx::query_as::<_, MemberWithProfile>(
            "SELECT m.id, m.workspace_id, m.user_id, u.email, u.display_name,
                    m.role, m.created_at
             FROM workspace_members m
             JOIN users u ON u.id = m.user_id
             WHERE m.workspace_id = $1
             ORDER BY m.created_at ASC",
        )
        .bind(workspace_id)
        .fetch_all(pool)
        .await
    }

    /// Change a member's workspace role. Returns the updated row, or `None`
    /// if the membership does not exist in the given workspace.
    pub async fn update_role(
        pool: &PgPool,
        id: DbId,
        workspace_id: DbId,
        role: &str,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!(
            "UPDATE workspace_members SET role = $3
             WHERE id = $1 AND workspace_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .bind(workspace_id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// Remove a member from a workspace. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, workspace_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM workspace_members WHERE id = $1 AND workspace_id = $2")
                .bind(id)
                .bind(workspace_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
