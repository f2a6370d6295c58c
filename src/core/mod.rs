pub mod app_config;
pub mod gui_manager;
pub mod meta_store;
pub mod swap_engine;
pub mod swap_session;
pub mod system;
