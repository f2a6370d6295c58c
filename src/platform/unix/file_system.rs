use crate::interface::file_system::FileSystemTrait;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl FileSystemTrait for FileSystem {}
