use crate::model::error::Error;
use crate::model::error::io::IOError;
use crate::model::error::misc::MiscError;
use crate::model::log::system::SystemLog;
use crate::model::meta_record::MetaRecord;
use crate::model::path_selection::Role;
use crate::utils::file_lock::FileLock;
use macros::log;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct MetaStore {
    path: PathBuf,
}

impl MetaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<MetaRecord, Error> {
        let lock = self.open_locked()?;
        self.read_record(&lock)
    }

    /// Re-reads the file and changes one entry under a single lock. A corrupt
    /// file is logged and replaced by a record holding only the new entry.
    pub fn update(&self, role: Role, directory: String) -> Result<MetaRecord, Error> {
        let lock = self.open_locked()?;
        let current = match self.read_record(&lock) {
            Ok(record) => record,
            Err(err @ Error::Misc(MiscError::DeserializeFailed { .. })) => {
                log!(err);
                MetaRecord::default()
            }
            Err(err) => return Err(err),
        };
        let record = current.with_directory(role, directory);
        self.write_record(&lock, &record)?;
        Ok(record)
    }

    fn open_locked(&self) -> Result<FileLock, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|err| IOError::OpenFileFailed(&self.path, err))?;
        FileLock::acquire(file, &self.path)
    }

    // A missing or zero-length file is first-run state.
    fn read_record(&self, lock: &FileLock) -> Result<MetaRecord, Error> {
        let length = lock
            .file()
            .metadata()
            .map_err(|err| IOError::ReadFileFailed(&self.path, err))?
            .len();
        if length == 0 {
            let record = MetaRecord::default();
            self.write_record(lock, &record)?;
            log!(SystemLog::MetaCreated {
                path: self.path.clone()
            });
            return Ok(record);
        }

        let mut contents = String::new();
        let mut file = lock.file();
        file.seek(SeekFrom::Start(0))
            .map_err(|err| IOError::ReadFileFailed(&self.path, err))?;
        file.read_to_string(&mut contents)
            .map_err(|err| IOError::ReadFileFailed(&self.path, err))?;
        let record = serde_json::from_str::<MetaRecord>(&contents)
            .map_err(|err| MiscError::DeserializeFailed(&self.path, err))?;
        Ok(record)
    }

    // Truncation happens under the lock, never at open time.
    fn write_record(&self, lock: &FileLock, record: &MetaRecord) -> Result<(), Error> {
        let mut file = lock.file();
        file.set_len(0)
            .map_err(|err| IOError::WriteFileFailed(&self.path, err))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|err| IOError::WriteFileFailed(&self.path, err))?;

        let mut serializer =
            serde_json::Serializer::with_formatter(&mut file, PrettyFormatter::with_indent(INDENT));
        record
            .serialize(&mut serializer)
            .map_err(|err| MiscError::SerializeFailed(&self.path, err))?;

        file.flush()
            .map_err(|err| IOError::WriteFileFailed(&self.path, err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_creates_empty_record_on_first_run() {
        let tmp = tempdir().unwrap();
        let store = MetaStore::new(tmp.path().join("meta.json"));

        let record = store.load().unwrap();

        assert_eq!(record, MetaRecord::default());
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "{\n    \"sourceDirectory\": \"\",\n    \"destinationDirectory\": \"\"\n}"
        );
    }

    #[test]
    fn load_treats_empty_file_as_first_run() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meta.json");
        fs::write(&path, "").unwrap();

        let record = MetaStore::new(&path).load().unwrap();

        assert_eq!(record, MetaRecord::default());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn updated_record_survives_a_fresh_store() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meta.json");
        let store = MetaStore::new(&path);

        store
            .update(Role::Source, "/home/user/data".to_string())
            .unwrap();
        let record = store
            .update(Role::Destination, "/home/user/proj/data".to_string())
            .unwrap();
        let reloaded = MetaStore::new(&path).load().unwrap();

        assert_eq!(reloaded, record);
        assert_eq!(reloaded.source_directory, "/home/user/data");
    }

    #[test]
    fn shorter_record_leaves_no_trailing_bytes() {
        let tmp = tempdir().unwrap();
        let store = MetaStore::new(tmp.path().join("meta.json"));

        store
            .update(Role::Source, "/a/very/long/path/to/some/data".to_string())
            .unwrap();
        let short = store.update(Role::Source, "/data".to_string()).unwrap();

        assert_eq!(store.load().unwrap(), short);
        assert_eq!(short.source_directory, "/data");
    }

    #[test]
    fn update_keeps_entries_written_by_another_store() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meta.json");
        let first = MetaStore::new(&path);
        let second = MetaStore::new(&path);
        first.load().unwrap();

        first
            .update(Role::Source, "/home/user/data".to_string())
            .unwrap();
        let record = second
            .update(Role::Destination, "/home/user/proj/data".to_string())
            .unwrap();

        assert_eq!(record.source_directory, "/home/user/data");
        assert_eq!(record.destination_directory, "/home/user/proj/data");
        assert_eq!(MetaStore::new(&path).load().unwrap(), record);
    }

    #[test]
    fn update_overwrites_corrupt_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meta.json");
        fs::write(&path, "{ not json").unwrap();

        let record = MetaStore::new(&path)
            .update(Role::Source, "/home/user/data".to_string())
            .unwrap();

        assert_eq!(record.source_directory, "/home/user/data");
        assert_eq!(record.destination_directory, "");
        assert_eq!(MetaStore::new(&path).load().unwrap(), record);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meta.json");
        fs::write(&path, "{ not json").unwrap();

        let err = MetaStore::new(&path).load().unwrap_err();

        assert!(matches!(err, Error::Misc(MiscError::DeserializeFailed { .. })));
    }
}
