//! Domain types, constants, and validation rules for the Viz. backend.
//!
//! Nothing in this crate performs I/O, so it is shared by the repository
//! layer and the HTTP layer alike.

pub mod account;
pub mod approval;
pub mod content;
pub mod editorial;
pub mod error;
pub mod moderation;
pub mod pagination;
pub mod quotable_region;
pub mod roles;
pub mod types;
