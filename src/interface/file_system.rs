use crate::model::error::Error;
use crate::model::error::io::IOError;
use crate::model::swap_report::CopyStats;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub trait FileSystemTrait {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_directory(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path).map_err(|err| IOError::CreateDirectoryFailed(path, err))?;
        Ok(())
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> Result<u64, Error> {
        let bytes = fs::copy(source, destination)
            .map_err(|err| IOError::CopyFileFailed(source, destination, err))?;
        Ok(bytes)
    }

    // Merge copy: extra entries in `destination` are kept, same-named files overwritten.
    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<CopyStats, Error> {
        if !self.is_directory(source) {
            return Err(IOError::NotADirectory(source).into());
        }
        self.create_directory(destination)?;

        let mut stats = CopyStats::default();
        for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|err| IOError::ReadDirectoryFailed(source, err))?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|err| IOError::ReadDirectoryFailed(entry.path(), err))?;
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                self.create_directory(&target)?;
                stats.directories += 1;
            } else {
                stats.bytes += self.copy_file(entry.path(), &target)?;
                stats.files += 1;
            }
        }
        Ok(stats)
    }

    fn delete_directory(&self, path: &Path) -> Result<(), Error> {
        fs::remove_dir_all(path).map_err(|err| IOError::DeleteDirectoryFailed(path, err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::file_system::FileSystem;
    use tempfile::tempdir;

    #[test]
    fn copy_tree_copies_nested_entries() {
        let tmp = tempdir().unwrap();
        let source = tmp.path().join("src");
        fs::create_dir_all(source.join("worlds/alpha")).unwrap();
        fs::create_dir_all(source.join("empty")).unwrap();
        fs::write(source.join("options.json"), "{}").unwrap();
        fs::write(source.join("worlds/alpha/world.json"), "alpha").unwrap();

        let destination = tmp.path().join("dst");
        let stats = FileSystem.copy_tree(&source, &destination).unwrap();

        assert_eq!(stats.files, 2);
        assert_eq!(stats.directories, 3);
        assert_eq!(stats.bytes, 7);
        assert!(destination.join("empty").is_dir());
        assert_eq!(
            fs::read_to_string(destination.join("worlds/alpha/world.json")).unwrap(),
            "alpha"
        );
    }

    #[test]
    fn copy_tree_merges_into_existing_destination() {
        let tmp = tempdir().unwrap();
        let source = tmp.path().join("src");
        let destination = tmp.path().join("dst");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&destination).unwrap();
        fs::write(source.join("shared.txt"), "new").unwrap();
        fs::write(destination.join("shared.txt"), "old").unwrap();
        fs::write(destination.join("kept.txt"), "kept").unwrap();

        FileSystem.copy_tree(&source, &destination).unwrap();

        assert_eq!(fs::read_to_string(destination.join("shared.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(destination.join("kept.txt")).unwrap(), "kept");
    }

    #[test]
    fn copy_tree_rejects_missing_source() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing");

        let err = FileSystem
            .copy_tree(&missing, &tmp.path().join("dst"))
            .unwrap_err();

        assert_eq!(err, Error::IO(IOError::NotADirectory(missing)));
        assert!(!tmp.path().join("dst").exists());
    }

    #[test]
    fn delete_directory_removes_whole_tree() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("data");
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/c.txt"), "c").unwrap();

        FileSystem.delete_directory(&root).unwrap();

        assert!(!root.exists());
    }
}
