use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{config::config_error::ConfigError, smtp::delivery_error::DeliveryError};

/// Errors that abort a run before or during a batch.
#[derive(Debug, Error)]
pub enum DoveError {
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl DoveError {
    pub fn missing_file<T: AsRef<Path>>(path: T) -> Self {
        DoveError::MissingFile(path.as_ref().to_path_buf())
    }

    pub fn io<T: AsRef<Path>>(path: T, source: std::io::Error) -> Self {
        DoveError::Io { path: path.as_ref().to_path_buf(), source }
    }
}
