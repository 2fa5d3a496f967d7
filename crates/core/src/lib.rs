//! Domain logic for the Kaizen project tracker.
//!
//! Pure types and rules with no I/O: role definitions, the project access
//! evaluator, invite lifecycle helpers, and the shared error taxonomy.
//! Everything here is exercised by the `kaizen-db` repositories and the
//! `kaizen-api` handlers.

pub mod access;
pub mod error;
pub mod invite;
pub mod project;
pub mod roles;
pub mod types;
