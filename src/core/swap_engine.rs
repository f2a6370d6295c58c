use crate::interface::file_system::FileSystemTrait;
use crate::model::error::Error;
use crate::model::error::swap::{SwapError, SwapStage};
use crate::model::log::swap::SwapLog;
use crate::model::path_selection::PathSelection;
use crate::model::swap_report::{CopyStats, SwapReport};
use crate::platform::file_system::FileSystem;
use chrono::Local;
use macros::log;
use std::path::{Path, PathBuf};

pub const BACKUP_DIRECTORY_NAME: &str = "backupFoundryData";

#[derive(Debug, Clone, PartialEq)]
pub struct SwapFailure {
    pub stage: SwapStage,
    pub error: Error,
}

impl SwapFailure {
    fn at(stage: SwapStage) -> impl FnOnce(Error) -> Self {
        move |error| Self { stage, error }
    }
}

pub fn backup_directory(destination: &Path) -> Result<PathBuf, SwapError> {
    let parent = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .ok_or_else(|| SwapError::NoParentDirectory {
            path: destination.to_path_buf(),
        })?;
    Ok(parent.join(BACKUP_DIRECTORY_NAME))
}

pub struct SwapEngine<F: FileSystemTrait = FileSystem> {
    file_system: F,
}

impl Default for SwapEngine<FileSystem> {
    fn default() -> Self {
        Self::new(FileSystem)
    }
}

impl<F: FileSystemTrait> SwapEngine<F> {
    pub fn new(file_system: F) -> Self {
        Self { file_system }
    }

    /// Backs up the destination, deletes it, then copies the source in its place.
    ///
    /// Nothing is rolled back: a failure in [`SwapStage::Delete`] or
    /// [`SwapStage::Restore`] leaves the destination partially replaced and
    /// the backup as the only copy of its previous content.
    pub fn swap(&self, selection: &PathSelection) -> Result<SwapReport, SwapFailure> {
        let Some((source, destination)) = selection.both() else {
            return Err(SwapFailure::at(SwapStage::Preflight)(SwapError::NotReady.into()));
        };
        let (source, destination) = (source.path(), destination.path());

        let backup_path = self
            .preflight(source, destination)
            .map_err(SwapFailure::at(SwapStage::Preflight))?;

        log!(SwapLog::BackupStarted {
            path: backup_path.clone()
        });
        let backed_up = self
            .backup(destination, &backup_path)
            .map_err(SwapFailure::at(SwapStage::Backup))?;
        log!(SwapLog::BackupCompleted {
            path: backup_path.clone(),
            files: backed_up.files
        });

        self.file_system
            .delete_directory(destination)
            .map_err(SwapFailure::at(SwapStage::Delete))?;
        log!(SwapLog::DestinationCleared {
            path: destination.to_path_buf()
        });

        let restored = self
            .file_system
            .copy_tree(source, destination)
            .map_err(SwapFailure::at(SwapStage::Restore))?;
        log!(SwapLog::SourceCopied {
            path: destination.to_path_buf(),
            files: restored.files
        });

        Ok(SwapReport {
            backup_path,
            backed_up,
            restored,
            completed_at: Local::now(),
        })
    }

    fn preflight(&self, source: &Path, destination: &Path) -> Result<PathBuf, Error> {
        if !self.file_system.is_directory(source) {
            Err(SwapError::SourceMissing {
                path: source.to_path_buf(),
            })?
        }
        if source == destination {
            Err(SwapError::SameDirectory {
                path: source.to_path_buf(),
            })?
        }
        if source.starts_with(destination) {
            Err(SwapError::SourceInsideDestination {
                path: source.to_path_buf(),
                destination: destination.to_path_buf(),
            })?
        }
        if destination.starts_with(source) {
            Err(SwapError::DestinationInsideSource {
                path: destination.to_path_buf(),
                origin: source.to_path_buf(),
            })?
        }
        let backup_path = backup_directory(destination)?;
        if source.starts_with(&backup_path) {
            Err(SwapError::SourceInsideBackup {
                path: source.to_path_buf(),
                backup: backup_path.clone(),
            })?
        }
        Ok(backup_path)
    }

    fn backup(&self, destination: &Path, backup_path: &Path) -> Result<CopyStats, Error> {
        self.file_system.create_directory(backup_path)?;
        self.file_system.copy_tree(destination, backup_path)
    }
}
