pub mod auth;
pub mod invite;
pub mod member;
pub mod project;
pub mod todo;
pub mod workspace;
