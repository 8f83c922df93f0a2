//! Config files on disk for tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a config file under `dir`, creating parent directories if needed.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(&path, contents).expect("write");
    path
}

/// `file:` location for a path.
pub fn file_location(path: &Path) -> String {
    format!("file:{}", path.display())
}
