use macros::traceable;
use std::path::PathBuf;

traceable! {
    MiscError {
        #[error("UI platform error: {err}")]
        UIPlatformError => tracing::Level::ERROR,

        #[error("Failed to deserialize {path}: {err}")]
        DeserializeFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to serialize {path}: {err}")]
        SerializeFailed { path: PathBuf } => tracing::Level::ERROR,
    }
}
