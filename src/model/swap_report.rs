use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub directories: usize,
    pub bytes: u64,
}

#[derive(Debug, Clone)]
pub struct SwapReport {
    pub backup_path: PathBuf,
    pub backed_up: CopyStats,
    pub restored: CopyStats,
    pub completed_at: DateTime<Local>,
}
