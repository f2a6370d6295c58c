use crate::model::path_selection::Role;
use macros::loggable;
use std::path::PathBuf;

loggable! {
    SelectionError {
        #[error("No {role} directory was chosen")]
        NoDirectoryChosen { role: Role } => tracing::Level::WARN,

        #[error("The {role} directory {path} is not named \"data\"")]
        NotDataFolder { role: Role, path: PathBuf } => tracing::Level::WARN,
    }
}

impl SelectionError {
    pub fn role(&self) -> Role {
        match self {
            Self::NoDirectoryChosen { role } | Self::NotDataFolder { role, .. } => *role,
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            Self::NoDirectoryChosen { .. } => "Select a valid directory!",
            Self::NotDataFolder { .. } => "Select a folder named \"data\"!",
        }
    }
}
