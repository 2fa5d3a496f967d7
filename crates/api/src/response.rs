//! Response envelope for collection endpoints.
//!
//! The list surfaces (`GET /workspaces`, `GET /projects`, member and
//! invite listings, todo listings) wrap their payload as `{ "data": [...] }`
//! so an empty collection is unambiguous next to the `{ "error", "code" }`
//! shape produced by [`crate::error::AppError`]. Single-entity responses
//! (a created project, an accepted membership) are returned bare.

use serde::Serialize;

/// The `{ "data": T }` envelope returned by list handlers.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
