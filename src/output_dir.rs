use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::{Result, TestingFilesError, LOG_PREFIX};

/// Make sure the directory exists, creating it and its parents if needed
pub fn output_dir<P: AsRef<Path>>(name: P) -> Result<PathBuf> {
    let path = name.as_ref();
    if path.exists() && !path.is_dir() {
        return Err(TestingFilesError::Path(format!(
            "{} exists and is not a directory",
            path.display()
        )));
    }
    if !path.exists() {
        info!("{} creating output directory {}", LOG_PREFIX, path.display());
        fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

/// Scratch file in `dir` named by an explicit identifier
pub fn scratch_path<P: AsRef<Path>>(dir: P, name: &str) -> PathBuf {
    dir.as_ref().join(name)
}
