use crate::model::error::Error;
use crate::model::error::io::IOError;
use fs4::fs_std::FileExt;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileLock {
    file: File,
    path: PathBuf,
}

impl FileLock {
    pub fn acquire(file: File, path: &Path) -> Result<Self, Error> {
        FileExt::lock_exclusive(&file).map_err(|err| IOError::LockFileFailed(path, err))?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn file(&self) -> &File {
        &self.file
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(err) = FileExt::unlock(&self.file) {
            IOError::UnlockFileFailed(&self.path, err).log();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::OpenOptions;
    use std::io::{Read, Write};
    use tempfile::tempdir;

    #[test]
    fn lock_can_be_taken_again_after_drop() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meta.json");
        let open = || {
            OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)
                .unwrap()
        };

        {
            let lock = FileLock::acquire(open(), &path).unwrap();
            let mut file = lock.file();
            file.write_all(b"locked").unwrap();
        }

        let lock = FileLock::acquire(open(), &path).unwrap();
        let mut contents = String::new();
        let mut file = lock.file();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "locked");
    }
}
