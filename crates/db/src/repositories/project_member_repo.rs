//! Repository for the `project_members` table.

use sqlx::PgPool;
use kaizen_core::types::DbId;

use crate::models::project_member::ProjectMember;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, user_id, role, created_at";

/// Provides lookups for project-level membership.
pub struct ProjectMemberRepo;

impl ProjectMemberRepo {
    /// Insert a project membership row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
        role: &str,
    ) -> Result<ProjectMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_members (project_id, user_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Find a user's membership in a project, if any. Feeds the project
    /// role into the access evaluator.
    pub async fn find_for_user(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<Option<ProjectMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_members
             WHERE project_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
