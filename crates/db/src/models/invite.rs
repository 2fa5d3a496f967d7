//! Workspace invite model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kaizen_core::types::{DbId, Timestamp};

/// A row from the `workspace_invites` table.
///
/// The token is a bearer secret delivered in-band: it appears in creation
/// and list responses on the admin-gated invite surface only, never to
/// non-admin members.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invite {
    pub id: DbId,
    pub workspace_id: DbId,
    pub email: String,
    pub role: String,
    pub token: String,
    pub status: String,
    pub invited_by: DbId,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating an invite. Email is normalized and validated, and the
/// token and expiry are generated, before this reaches the repository.
#[derive(Debug)]
pub struct CreateInvite {
    pub workspace_id: DbId,
    pub email: String,
    pub role: String,
    pub token: String,
    pub invited_by: DbId,
    pub expires_at: Timestamp,
}

/// Request body for invite creation (`POST /workspaces/{id}/invites`).
#[derive(Debug, Deserialize)]
pub struct CreateInviteRequest {
    pub email: String,
    pub role: String,
}

/// Request body for invite acceptance (`POST /invites/accept`).
#[derive(Debug, Deserialize)]
pub struct AcceptInviteRequest {
    pub token: String,
}
