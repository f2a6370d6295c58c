pub mod swap;
pub mod system;
