pub mod io;
pub mod misc;
pub mod selection;
pub mod swap;
pub mod system;

use crate::model::error::io::IOError;
use crate::model::error::misc::MiscError;
use crate::model::error::selection::SelectionError;
use crate::model::error::swap::SwapError;
use crate::model::error::system::SystemError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(IOError),
    #[error(transparent)]
    Misc(MiscError),
    #[error(transparent)]
    Selection(SelectionError),
    #[error(transparent)]
    Swap(SwapError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::IO(error) => error.level(),
            Self::Misc(error) => error.level(),
            Self::Selection(error) => error.level(),
            Self::Swap(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }
}

impl From<IOError> for Error {
    fn from(error: IOError) -> Self {
        Self::IO(error)
    }
}

impl From<MiscError> for Error {
    fn from(error: MiscError) -> Self {
        Self::Misc(error)
    }
}

impl From<SelectionError> for Error {
    fn from(error: SelectionError) -> Self {
        Self::Selection(error)
    }
}

impl From<SwapError> for Error {
    fn from(error: SwapError) -> Self {
        Self::Swap(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
