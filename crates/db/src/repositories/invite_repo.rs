//! Repository for the `workspace_invites` table.
//!
//! Acceptance is the one multi-table write in the system: it flips the
//! invite to `accepted` and inserts a membership inside a single
//! transaction, with a conditional update so a token can be consumed at
//! most once even under concurrent attempts.

use sqlx::PgPool;
use kaizen_core::types::DbId;

use crate::models::invite::{CreateInvite, Invite};
use crate::models::membership::Membership;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, workspace_id, email, role, token, status, invited_by, expires_at, created_at";

/// Outcome of an acceptance attempt that found no usable invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptError {
    /// No invite carries this token.
    UnknownToken,
    /// The invite exists but is accepted, revoked, or expired.
    NotPending,
    /// The user already belongs to the workspace.
    AlreadyMember,
}

/// Provides invite CRUD and the transactional accept operation.
pub struct InviteRepo;

impl InviteRepo {
    /// Insert a new pending invite, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInvite) -> Result<Invite, sqlx::Error> {
        let query = format!(
            "INSERT INTO workspace_invites (workspace_id, email, role, token, invited_by, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invite>(&query)
            .bind(input.workspace_id)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.token)
            .bind(input.invited_by)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an invite by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workspace_invites WHERE id = $1");
        sqlx::query_as::<_, Invite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an invite by its token.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Invite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workspace_invites WHERE token = $1");
        sqlx::query_as::<_, Invite>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// List a workspace's invites, newest first. Scoped by workspace id.
    pub async fn list_for_workspace(
        pool: &PgPool,
        workspace_id: DbId,
    ) -> Result<Vec<Invite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workspace_invites
             WHERE workspace_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Invite>(&query)
            .bind(workspace_id)
            .fetch_all(pool)
            .await
    }

    /// Revoke a pending invite. The conditional `status = 'pending'` guard
    /// makes terminal states truly terminal; returns the updated row, or
    /// `None` if the invite was absent or no longer pending.
    pub async fn revoke(
        pool: &PgPool,
        id: DbId,
        workspace_id: DbId,
    ) -> Result<Option<Invite>, sqlx::Error> {
        let query = format!(
            "UPDATE workspace_invites SET status = 'revoked'
             WHERE id = $1 AND workspace_id = $2 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invite>(&query)
            .bind(id)
            .bind(workspace_id)
            .fetch_optional(pool)
            .await
    }

    /// Accept an invite by token on behalf of `user_id`, atomically.
    ///
    /// One transaction: a conditional update consumes the token (only from
    /// `pending` and before `expires_at`), then a membership row is created
    /// with the invite's role. Any failure rolls back both writes, so the
    /// invite is never marked accepted without a membership or vice versa.
    pub async fn accept(
        pool: &PgPool,
        token: &str,
        user_id: DbId,
    ) -> Result<Result<Membership, AcceptError>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update = format!(
            "UPDATE workspace_invites SET status = 'accepted'
             WHERE token = $1 AND status = 'pending' AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        let invite = sqlx::query_as::<_, Invite>(&update)
            .bind(token)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(invite) = invite else {
            tx.rollback().await?;
            // Distinguish "never existed" from "exists but unusable" for
            // error reporting; read outside the (rolled back) transaction.
            return Ok(Err(match Self::find_by_token(pool, token).await? {
                Some(_) => AcceptError::NotPending,
                None => AcceptError::UnknownToken,
            }));
        };

        let membership = sqlx::query_as::<_, Membership>(
            "INSERT INTO workspace_members (workspace_id, user_id, role)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_workspace_members_workspace_user DO NOTHING
             RETURNING id, workspace_id, user_id, role, created_at",
        )
        .bind(invite.workspace_id)
        .bind(user_id)
        .bind(&invite.role)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(membership) = membership else {
            tx.rollback().await?;
            return Ok(Err(AcceptError::AlreadyMember));
        };

        tx.commit().await?;
        tracing::debug!(
            invite_id = invite.id,
            workspace_id = invite.workspace_id,
            user_id,
            "Invite token consumed"
        );
        Ok(Ok(membership))
    }
}
