use crate::model::error::selection::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DATA_FOLDER_NAME: &str = "data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Source,
    Destination,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Source, Role::Destination];

    pub fn title(self) -> &'static str {
        match self {
            Role::Source => "Source",
            Role::Destination => "Destination",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => write!(f, "source"),
            Role::Destination => write!(f, "destination"),
        }
    }
}

/// A directory whose final path segment is exactly `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFolder(PathBuf);

impl DataFolder {
    pub fn parse(role: Role, path: impl Into<PathBuf>) -> Result<Self, SelectionError> {
        let path = path.into();
        match path.file_name() {
            Some(name) if name == DATA_FOLDER_NAME => Ok(Self(path)),
            _ => Err(SelectionError::NotDataFolder { role, path }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for DataFolder {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    NoSelection,
    SourceValid,
    DestinationValid,
    Ready,
    Submitted,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSelection {
    source: Option<DataFolder>,
    destination: Option<DataFolder>,
}

impl PathSelection {
    pub fn get(&self, role: Role) -> Option<&DataFolder> {
        match role {
            Role::Source => self.source.as_ref(),
            Role::Destination => self.destination.as_ref(),
        }
    }

    pub fn assign(&mut self, role: Role, folder: DataFolder) {
        match role {
            Role::Source => self.source = Some(folder),
            Role::Destination => self.destination = Some(folder),
        }
    }

    pub fn both(&self) -> Option<(&DataFolder, &DataFolder)> {
        Some((self.source.as_ref()?, self.destination.as_ref()?))
    }

    pub fn phase(&self) -> SwapPhase {
        match (&self.source, &self.destination) {
            (None, None) => SwapPhase::NoSelection,
            (Some(_), None) => SwapPhase::SourceValid,
            (None, Some(_)) => SwapPhase::DestinationValid,
            (Some(_), Some(_)) => SwapPhase::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_folders_named_data() {
        assert!(DataFolder::parse(Role::Source, "/home/user/data").is_ok());
        assert!(DataFolder::parse(Role::Source, "/home/user/data/").is_ok());
        assert!(DataFolder::parse(Role::Source, "/home/user/notdata").is_err());
        assert!(DataFolder::parse(Role::Source, "/home/user/Data").is_err());
        assert!(DataFolder::parse(Role::Source, "/home/user/data/worlds").is_err());
        assert!(DataFolder::parse(Role::Source, "/").is_err());
    }

    #[test]
    fn rejection_names_role_and_path() {
        let err = DataFolder::parse(Role::Destination, "/home/user/notdata").unwrap_err();

        assert_eq!(
            err,
            SelectionError::NotDataFolder {
                role: Role::Destination,
                path: PathBuf::from("/home/user/notdata"),
            }
        );
    }

    #[test]
    fn phase_follows_filled_slots() {
        let mut selection = PathSelection::default();
        assert_eq!(selection.phase(), SwapPhase::NoSelection);

        let destination = DataFolder::parse(Role::Destination, "/b/data").unwrap();
        selection.assign(Role::Destination, destination);
        assert_eq!(selection.phase(), SwapPhase::DestinationValid);
        assert!(selection.both().is_none());

        let source = DataFolder::parse(Role::Source, "/a/data").unwrap();
        selection.assign(Role::Source, source);
        assert_eq!(selection.phase(), SwapPhase::Ready);

        let (source, destination) = selection.both().unwrap();
        assert_eq!(source.path(), Path::new("/a/data"));
        assert_eq!(destination.path(), Path::new("/b/data"));
    }
}
