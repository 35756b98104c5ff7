pub mod admin;
pub mod approval;
pub mod content;
pub mod editorial;
pub mod viz_list;
