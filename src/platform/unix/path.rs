use std::path::Path;

pub fn portable_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
