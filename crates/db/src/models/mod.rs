pub mod invite;
pub mod membership;
pub mod project;
pub mod project_member;
pub mod session;
pub mod todo;
pub mod user;
pub mod workspace;
