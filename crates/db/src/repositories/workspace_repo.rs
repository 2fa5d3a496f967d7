//! Repository for the `workspaces` table.

use sqlx::PgPool;
use kaizen_core::roles::WorkspaceRole;
use kaizen_core::types::DbId;

use crate::models::workspace::{CreateWorkspace, Workspace};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_by, created_at, updated_at";

/// Provides CRUD operations for workspaces.
pub struct WorkspaceRepo;

impl WorkspaceRepo {
    /// Create a workspace and enroll its creator as `owner`, atomically.
    ///
    /// A workspace without an owner is unreachable (nobody could administer
    /// it), so the two inserts share one transaction.
    pub async fn create_with_owner(
        pool: &PgPool,
        input: &CreateWorkspace,
        creator_id: DbId,
    ) -> Result<Workspace, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO workspaces (name, created_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let workspace = sqlx::query_as::<_, Workspace>(&query)
            .bind(&input.name)
            .bind(creator_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO workspace_members (workspace_id, user_id, role)
             VALUES ($1, $2, $3)",
        )
        .bind(workspace.id)
        .bind(creator_id)
        .bind(WorkspaceRole::Owner.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(workspace)
    }
}
