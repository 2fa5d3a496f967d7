//! Repository for the `projects` table.
//!
//! Every read is scoped by workspace id: cross-workspace rows are
//! indistinguishable from absent rows at this layer.

use sqlx::PgPool;
use kaizen_core::roles::ProjectRole;
use kaizen_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, workspace_id, name, description, status, owner_id, created_by, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project. When `grant_creator_membership` is set, the
    /// creator also receives a `project_members` owner row in the same
    /// transaction (regular creation; skipped for stakeholder proposals).
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        grant_creator_membership: bool,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (workspace_id, name, description, status, owner_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(input.workspace_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.owner_id)
            .bind(input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        if grant_creator_membership {
            sqlx::query(
                "INSERT INTO project_members (project_id, user_id, role)
                 VALUES ($1, $2, $3)",
            )
            .bind(project.id)
            .bind(input.created_by)
            .bind(ProjectRole::Owner.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by ID within a workspace. A matching id in another
    /// workspace returns `None`.
    pub async fn find_in_workspace(
        pool: &PgPool,
        id: DbId,
        workspace_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND workspace_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(workspace_id)
            .fetch_optional(pool)
            .await
    }

    /// List a workspace's projects, newest first.
    pub async fn list_for_workspace(
        pool: &PgPool,
        workspace_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE workspace_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(workspace_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists in the workspace.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        workspace_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                owner_id = COALESCE($6, owner_id),
                updated_at = NOW()
             WHERE id = $1 AND workspace_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(workspace_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project (todos and project members cascade).
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, workspace_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND workspace_id = $2")
            .bind(id)
            .bind(workspace_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
