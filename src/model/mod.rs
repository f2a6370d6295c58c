pub mod config;
pub mod error;
pub mod log;
pub mod meta_record;
pub mod path_selection;
pub mod swap_report;
