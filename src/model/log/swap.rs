use crate::model::error::swap::SwapStage;
use crate::model::path_selection::Role;
use macros::loggable;
use std::path::PathBuf;

loggable! {
    SwapLog {
        #[error("Selected {role} directory {path}")]
        DirectorySelected { role: Role, path: PathBuf } => tracing::Level::INFO,

        #[error("Restored {role} directory {path}")]
        SelectionRestored { role: Role, path: PathBuf } => tracing::Level::INFO,

        #[error("Backing up destination into {path}")]
        BackupStarted { path: PathBuf } => tracing::Level::INFO,

        #[error("Backed up {files} files into {path}")]
        BackupCompleted { path: PathBuf, files: usize } => tracing::Level::INFO,

        #[error("Deleted destination {path}")]
        DestinationCleared { path: PathBuf } => tracing::Level::INFO,

        #[error("Copied {files} source files into {path}")]
        SourceCopied { path: PathBuf, files: usize } => tracing::Level::INFO,

        #[error("Swap aborted during {stage}")]
        SwapAborted { stage: SwapStage } => tracing::Level::ERROR,
    }
}
