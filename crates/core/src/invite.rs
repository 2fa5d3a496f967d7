//! Invite lifecycle helpers: status transitions, token generation, and
//! email normalization.
//!
//! The state machine is `pending -> accepted` or `pending -> revoked`;
//! both terminal states are final. The transitions themselves are enforced
//! with conditional updates in the repository layer so concurrent
//! double-acceptance of the same token is rejected by the database.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Invite lifetime. Tokens older than this are unacceptable even while
/// still `pending`.
pub const INVITE_TTL_DAYS: i64 = 14;

/// Invite status as stored in `workspace_invites.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Revoked,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "pending",
            InviteStatus::Accepted => "accepted",
            InviteStatus::Revoked => "revoked",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InviteStatus::Pending),
            "accepted" => Some(InviteStatus::Accepted),
            "revoked" => Some(InviteStatus::Revoked),
            _ => None,
        }
    }
}

/// Generate an opaque, unguessable invite token (UUID v4).
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}

/// Normalize an invitee email: trim whitespace and lowercase.
///
/// Applied before both storage and comparison so `" Bob@Example.COM "`
/// and `"bob@example.com"` refer to the same invite.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalize and syntactically validate an invitee email address.
pub fn validate_email(email: &str) -> Result<String, CoreError> {
    let normalized = normalize_email(email);
    if !normalized.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{normalized}' is not a valid email address"
        )));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Bob@Example.COM "), "bob@example.com");
        assert_eq!(normalize_email("plain@host.nl"), "plain@host.nl");
    }

    #[test]
    fn test_validate_email_accepts_normalized() {
        let email = validate_email(" Alice@Example.com ").unwrap();
        assert_eq!(email, "alice@example.com");
    }

    #[test]
    fn test_validate_email_rejects_garbage() {
        assert_matches!(validate_email("not-an-email"), Err(CoreError::Validation(_)));
        assert_matches!(validate_email(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_email("a@"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn test_status_parse_fail_closed() {
        assert_eq!(InviteStatus::parse("pending"), Some(InviteStatus::Pending));
        assert_eq!(InviteStatus::parse("expired"), None);
    }
}
