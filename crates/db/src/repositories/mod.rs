pub mod invite_repo;
pub mod membership_repo;
pub mod project_member_repo;
pub mod project_repo;
pub mod session_repo;
pub mod todo_repo;
pub mod user_repo;
pub mod workspace_repo;

pub use invite_repo::InviteRepo;
pub use membership_repo::MembershipRepo;
pub use project_member_repo::ProjectMemberRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
pub use workspace_repo::WorkspaceRepo;
