pub mod admin_activity_log;
pub mod approval_request;
pub mod content;
pub mod editorial;
pub mod user;
pub mod viz_list;
