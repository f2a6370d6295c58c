use macros::traceable;
use std::path::PathBuf;

traceable! {
    SystemError {
        #[error("Failed to read configuration {path}: {err}")]
        ReadConfigFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Invalid configuration {path}: {err}")]
        InvalidConfig { path: PathBuf } => tracing::Level::ERROR,

        #[no_source]
        #[error("Configuration value out of range: {field}")]
        ConfigOutOfRange { field: String } => tracing::Level::ERROR,

        #[error("Failed to initialize logging: {err}")]
        LoggingInitFailed => tracing::Level::ERROR,
    }
}
