use macros::traceable;
use std::path::PathBuf;

traceable! {
    IOError {
        #[error("Failed to create directory {path}: {err}")]
        CreateDirectoryFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to read directory {path}: {err}")]
        ReadDirectoryFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to copy file from {src} to {dst}: {err}")]
        CopyFileFailed { src: PathBuf, dst: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to delete directory {path}: {err}")]
        DeleteDirectoryFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to change permissions of {path}: {err}")]
        SetPermissionsFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to open file {path}: {err}")]
        OpenFileFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to read file {path}: {err}")]
        ReadFileFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to write file {path}: {err}")]
        WriteFileFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to lock file {path}: {err}")]
        LockFileFailed { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to unlock file {path}: {err}")]
        UnlockFileFailed { path: PathBuf } => tracing::Level::WARN,

        #[no_source]
        #[error("Not a directory: {path}")]
        NotADirectory { path: PathBuf } => tracing::Level::ERROR,
    }
}
