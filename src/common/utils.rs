use std::path::{Path, PathBuf};

use crate::utils::error::DoveError;

/// Expands a leading `~` to the home directory and makes the path absolute.
pub fn expand_path<T: AsRef<Path>>(path: T) -> PathBuf {
    let path = path.as_ref();
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };

    std::path::absolute(&expanded).unwrap_or(expanded)
}

/// Fails with `MissingFile` unless the path exists.
pub fn ensure_exists<T: AsRef<Path>>(path: T) -> Result<(), DoveError> {
    let path = path.as_ref();
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(DoveError::missing_file(path)),
        Err(err) => Err(DoveError::io(path, err)),
    }
}

/// Reads the whole message file as UTF-8 markdown.
pub async fn read_message<T: AsRef<Path>>(path: T) -> Result<String, DoveError> {
    let path = path.as_ref();
    ensure_exists(path)?;
    tokio::fs::read_to_string(path).await.map_err(|err| DoveError::io(path, err))
}
