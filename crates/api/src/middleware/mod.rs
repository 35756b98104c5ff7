//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the session token to an active user.
//! - [`rbac::RequireAdmin`] -- Requires the `ADMIN` role.

pub mod auth;
pub mod rbac;
