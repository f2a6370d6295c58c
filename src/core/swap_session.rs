use crate::core::meta_store::MetaStore;
use crate::core::swap_engine::{SwapEngine, SwapFailure};
use crate::interface::file_system::FileSystemTrait;
use crate::model::error::Error;
use crate::model::error::selection::SelectionError;
use crate::model::error::swap::SwapError;
use crate::model::log::swap::SwapLog;
use crate::model::path_selection::{DataFolder, PathSelection, Role, SwapPhase};
use crate::model::swap_report::SwapReport;
use crate::platform::file_system::FileSystem;
use crate::platform::path::portable_path;
use macros::log;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pending,
    Submitted,
    Failed,
}

pub struct SwapSession<F: FileSystemTrait = FileSystem> {
    store: MetaStore,
    engine: SwapEngine<F>,
    selection: PathSelection,
    outcome: Outcome,
}

impl SwapSession<FileSystem> {
    pub fn restore(store: MetaStore) -> Self {
        Self::restore_with(store, SwapEngine::default())
    }
}

impl<F: FileSystemTrait> SwapSession<F> {
    // An unreadable record is logged; the next valid selection replaces it.
    pub fn restore_with(store: MetaStore, engine: SwapEngine<F>) -> Self {
        let record = store
            .load()
            .inspect_err(|err| log!(err, store.path().display()))
            .unwrap_or_default();

        let mut selection = PathSelection::default();
        for role in Role::ALL {
            let directory = record.directory(role);
            if directory.is_empty() {
                continue;
            }
            match DataFolder::parse(role, directory) {
                Ok(folder) => {
                    log!(SwapLog::SelectionRestored {
                        role,
                        path: folder.path().to_path_buf()
                    });
                    selection.assign(role, folder);
                }
                Err(err) => log!(err),
            }
        }

        Self {
            store,
            engine,
            selection,
            outcome: Outcome::Pending,
        }
    }

    pub fn selection(&self) -> &PathSelection {
        &self.selection
    }

    pub fn phase(&self) -> SwapPhase {
        match self.outcome {
            Outcome::Pending => self.selection.phase(),
            Outcome::Submitted => SwapPhase::Submitted,
            Outcome::Failed => SwapPhase::Failed,
        }
    }

    pub fn select_directory(
        &mut self,
        role: Role,
        path: Option<PathBuf>,
    ) -> Result<SwapPhase, Error> {
        self.try_select(role, path).inspect_err(|err| log!(err))
    }

    // `None` is a cancelled picker. The selection changes only after the write.
    fn try_select(&mut self, role: Role, path: Option<PathBuf>) -> Result<SwapPhase, Error> {
        let path = path.ok_or(SelectionError::NoDirectoryChosen { role })?;
        let folder = DataFolder::parse(role, path)?;

        self.store.update(role, portable_path(folder.path()))?;

        log!(SwapLog::DirectorySelected {
            role,
            path: folder.path().to_path_buf()
        });
        self.selection.assign(role, folder);
        Ok(self.phase())
    }

    // Later calls are refused whether or not the first one succeeded.
    pub fn confirm_swap(&mut self) -> Result<SwapReport, Error> {
        match self.outcome {
            Outcome::Pending => {}
            Outcome::Submitted | Outcome::Failed => Err(SwapError::AlreadySubmitted)?,
        }

        match self.engine.swap(&self.selection) {
            Ok(report) => {
                self.outcome = Outcome::Submitted;
                Ok(report)
            }
            Err(SwapFailure { stage, error }) => {
                log!(error);
                log!(SwapLog::SwapAborted { stage });
                if stage.destination_modified() {
                    self.outcome = Outcome::Failed;
                }
                Err(error)
            }
        }
    }
}
