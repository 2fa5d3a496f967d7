//! Role-based access evaluator.
//!
//! The single source of truth for "who may do what". Handlers never compare
//! role strings directly; they parse roles via [`crate::roles`] and call the
//! functions here.

use crate::roles::{ProjectRole, WorkspaceRole};
use crate::types::DbId;

/// Decide whether a user may edit a project and its todos.
///
/// Rules, evaluated in order:
/// 1. Workspace owners and admins may always edit.
/// 2. Workspace members may edit if they own the project, or hold the
///    `owner` or `editor` project role.
/// 3. Stakeholders are read-only.
///
/// A `None` workspace role (unrecognized string in storage) denies.
pub fn can_edit_project(
    workspace_role: Option<WorkspaceRole>,
    project_owner_id: Option<DbId>,
    user_id: DbId,
    project_role: Option<ProjectRole>,
) -> bool {
    match workspace_role {
        Some(WorkspaceRole::Owner) | Some(WorkspaceRole::Admin) => true,
        Some(WorkspaceRole::Member) => {
            if project_owner_id == Some(user_id) {
                return true;
            }
            matches!(project_role, Some(ProjectRole::Owner) | Some(ProjectRole::Editor))
        }
        Some(WorkspaceRole::Stakeholder) => false,
        None => false,
    }
}

/// Decide whether a role may administer the workspace (manage members,
/// create and revoke invites).
pub fn can_administer(workspace_role: WorkspaceRole) -> bool {
    matches!(workspace_role, WorkspaceRole::Owner | WorkspaceRole::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: DbId = 7;
    const OTHER: DbId = 8;

    #[test]
    fn test_owner_and_admin_always_edit() {
        for role in [WorkspaceRole::Owner, WorkspaceRole::Admin] {
            // Regardless of project ownership or project role.
            assert!(can_edit_project(Some(role), None, USER, None));
            assert!(can_edit_project(Some(role), Some(OTHER), USER, None));
            assert!(can_edit_project(
                Some(role),
                Some(OTHER),
                USER,
                Some(ProjectRole::Viewer)
            ));
        }
    }

    #[test]
    fn test_stakeholder_never_edits() {
        let role = Some(WorkspaceRole::Stakeholder);
        assert!(!can_edit_project(role, Some(USER), USER, None));
        assert!(!can_edit_project(role, None, USER, Some(ProjectRole::Owner)));
        assert!(!can_edit_project(role, Some(USER), USER, Some(ProjectRole::Editor)));
    }

    #[test]
    fn test_member_edits_own_project() {
        assert!(can_edit_project(
            Some(WorkspaceRole::Member),
            Some(USER),
            USER,
            None
        ));
    }

    #[test]
    fn test_member_edits_via_project_role() {
        for pr in [ProjectRole::Owner, ProjectRole::Editor] {
            assert!(can_edit_project(
                Some(WorkspaceRole::Member),
                Some(OTHER),
                USER,
                Some(pr)
            ));
        }
    }

    #[test]
    fn test_member_denied_without_grant() {
        let role = Some(WorkspaceRole::Member);
        assert!(!can_edit_project(role, Some(OTHER), USER, None));
        assert!(!can_edit_project(role, None, USER, None));
        assert!(!can_edit_project(role, Some(OTHER), USER, Some(ProjectRole::Viewer)));
    }

    #[test]
    fn test_missing_role_fails_closed() {
        assert!(!can_edit_project(None, Some(USER), USER, Some(ProjectRole::Owner)));
    }

    #[test]
    fn test_can_administer() {
        assert!(can_administer(WorkspaceRole::Owner));
        assert!(can_administer(WorkspaceRole::Admin));
        assert!(!can_administer(WorkspaceRole::Member));
        assert!(!can_administer(WorkspaceRole::Stakeholder));
    }
}
