pub mod folder_tree;
pub mod main_page;
pub mod timed_notice;
