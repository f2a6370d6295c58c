use macros::loggable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapStage {
    Preflight,
    Backup,
    Delete,
    Restore,
}

impl SwapStage {
    /// Whether the destination may have been changed when this stage failed.
    pub fn destination_modified(self) -> bool {
        matches!(self, SwapStage::Delete | SwapStage::Restore)
    }
}

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SwapStage::Preflight => "preflight",
            SwapStage::Backup => "backup",
            SwapStage::Delete => "delete",
            SwapStage::Restore => "restore",
        };
        f.write_str(name)
    }
}

loggable! {
    SwapError {
        #[error("Both a source and a destination data folder must be selected")]
        NotReady => tracing::Level::WARN,

        #[error("The swap has already run in this session")]
        AlreadySubmitted => tracing::Level::WARN,

        #[error("Source directory does not exist: {path}")]
        SourceMissing { path: PathBuf } => tracing::Level::ERROR,

        #[error("Source and destination are the same directory: {path}")]
        SameDirectory { path: PathBuf } => tracing::Level::ERROR,

        #[error("Source {path} lies inside destination {destination}")]
        SourceInsideDestination { path: PathBuf, destination: PathBuf } => tracing::Level::ERROR,

        #[error("Source {path} lies inside backup directory {backup}")]
        SourceInsideBackup { path: PathBuf, backup: PathBuf } => tracing::Level::ERROR,

        #[error("Destination {path} lies inside source {origin}")]
        DestinationInsideSource { path: PathBuf, origin: PathBuf } => tracing::Level::ERROR,

        #[error("Destination has no parent directory for the backup: {path}")]
        NoParentDirectory { path: PathBuf } => tracing::Level::ERROR,
    }
}
