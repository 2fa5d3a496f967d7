//! Repository for the `todos` table. All queries are scoped by project id.

use sqlx::PgPool;
use kaizen_core::types::DbId;

use crate::models::todo::{Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, is_done, created_by, inserted_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        title: &str,
        created_by: DbId,
    ) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (project_id, title, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(project_id)
            .bind(title)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's todos, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE project_id = $1
             ORDER BY inserted_at DESC"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a todo. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE($2, title),
                is_done = COALESCE($3, is_done)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.is_done)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
