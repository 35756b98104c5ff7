//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_activity_log_repo;
pub mod approval_request_repo;
pub mod content_repo;
pub mod editorial_repo;
pub mod user_repo;
pub mod viz_list_repo;

pub use admin_activity_log_repo::AdminActivityLogRepo;
pub use approval_request_repo::ApprovalRequestRepo;
pub use content_repo::ContentRepo;
pub use editorial_repo::EditorialRepo;
pub use user_repo::UserRepo;
pub use viz_list_repo::VizListRepo;
