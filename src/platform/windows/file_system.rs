use crate::interface::file_system::FileSystemTrait;
use crate::model::error::Error;
use crate::model::error::io::IOError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl FileSystemTrait for FileSystem {
    // remove_dir_all stops at the first read-only file on Windows.
    fn delete_directory(&self, path: &Path) -> Result<(), Error> {
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(|err| IOError::ReadDirectoryFailed(path, err))?;
            let metadata = entry
                .metadata()
                .map_err(|err| IOError::ReadDirectoryFailed(entry.path(), err))?;
            let mut permissions = metadata.permissions();
            if permissions.readonly() {
                permissions.set_readonly(false);
                fs::set_permissions(entry.path(), permissions)
                    .map_err(|err| IOError::SetPermissionsFailed(entry.path(), err))?;
            }
        }

        fs::remove_dir_all(path).map_err(|err| IOError::DeleteDirectoryFailed(path, err))?;
        Ok(())
    }
}
