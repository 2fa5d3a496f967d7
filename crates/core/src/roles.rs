//! Workspace and project role definitions.
//!
//! Roles are stored as lowercase text in the database (`workspace_members.role`,
//! `project_members.role`, `workspace_invites.role`). Parsing is fail-closed:
//! an unrecognized string yields `None` and the caller must treat the user as
//! having no rights.

use serde::{Deserialize, Serialize};

/// A user's role within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceRole {
    Owner,
    Admin,
    Member,
    /// Read-only role. Stakeholders can propose projects but never edit todos.
    Stakeholder,
}

impl WorkspaceRole {
    /// The lowercase database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceRole::Owner => "owner",
            WorkspaceRole::Admin => "admin",
            WorkspaceRole::Member => "member",
            WorkspaceRole::Stakeholder => "stakeholder",
        }
    }

    /// Parse a stored role string. Returns `None` for anything outside the
    /// enumerated set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(WorkspaceRole::Owner),
            "admin" => Some(WorkspaceRole::Admin),
            "member" => Some(WorkspaceRole::Member),
            "stakeholder" => Some(WorkspaceRole::Stakeholder),
            _ => None,
        }
    }
}

/// A user's supplemental role within a single project.
///
/// Grants edit rights to workspace members who are neither workspace
/// admins/owners nor the project owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Owner,
    Editor,
    Viewer,
}

impl ProjectRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::Owner => "owner",
            ProjectRole::Editor => "editor",
            ProjectRole::Viewer => "viewer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(ProjectRole::Owner),
            "editor" => Some(ProjectRole::Editor),
            "viewer" => Some(ProjectRole::Viewer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_role_round_trip() {
        for role in [
            WorkspaceRole::Owner,
            WorkspaceRole::Admin,
            WorkspaceRole::Member,
            WorkspaceRole::Stakeholder,
        ] {
            assert_eq!(WorkspaceRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_roles_fail_closed() {
        assert_eq!(WorkspaceRole::parse("superadmin"), None);
        assert_eq!(WorkspaceRole::parse("OWNER"), None);
        assert_eq!(WorkspaceRole::parse(""), None);
        assert_eq!(ProjectRole::parse("maintainer"), None);
    }
}
