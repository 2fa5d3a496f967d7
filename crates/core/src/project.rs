//! Project status set and creation rules.

use serde::{Deserialize, Serialize};

use crate::roles::WorkspaceRole;
use crate::types::DbId;

/// Project status as stored in `projects.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Proposed,
    Active,
    Done,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Proposed => "proposed",
            ProjectStatus::Active => "active",
            ProjectStatus::Done => "done",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "proposed" => Some(ProjectStatus::Proposed),
            "active" => Some(ProjectStatus::Active),
            "done" => Some(ProjectStatus::Done),
            "archived" => Some(ProjectStatus::Archived),
            _ => None,
        }
    }
}

/// Initial shape of a freshly created project, derived from the creator's
/// workspace role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewProjectDisposition {
    pub status: ProjectStatus,
    /// `None` for stakeholder proposals; otherwise the creator.
    pub owner_id: Option<DbId>,
    /// Whether the creator should also receive a `project_members` owner row.
    pub grant_creator_membership: bool,
}

/// Stakeholders propose (status `proposed`, no owner, no project
/// membership); everyone else creates an `active` project they own.
pub fn new_project_disposition(role: WorkspaceRole, creator_id: DbId) -> NewProjectDisposition {
    if role == WorkspaceRole::Stakeholder {
        NewProjectDisposition {
            status: ProjectStatus::Proposed,
            owner_id: None,
            grant_creator_membership: false,
        }
    } else {
        NewProjectDisposition {
            status: ProjectStatus::Active,
            owner_id: Some(creator_id),
            grant_creator_membership: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stakeholder_proposes() {
        let d = new_project_disposition(WorkspaceRole::Stakeholder, 5);
        assert_eq!(d.status, ProjectStatus::Proposed);
        assert_eq!(d.owner_id, None);
        assert!(!d.grant_creator_membership);
    }

    #[test]
    fn test_others_create_active_owned_projects() {
        for role in [WorkspaceRole::Owner, WorkspaceRole::Admin, WorkspaceRole::Member] {
            let d = new_project_disposition(role, 5);
            assert_eq!(d.status, ProjectStatus::Active);
            assert_eq!(d.owner_id, Some(5));
            assert!(d.grant_creator_membership);
        }
    }

    #[test]
    fn test_status_parse_fail_closed() {
        assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("cancelled"), None);
    }
}
