//! Errors for provisioning and teardown

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while provisioning a skeleton
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Module identifier is empty")]
    EmptyModule,

    #[error("Failed to read module identifier: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to initialize go module: {0}")]
    ModuleInitFailed(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while tearing a skeleton down
#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("Failed to delete {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Attach a path to an IO error
pub(crate) trait IoPath<T> {
    fn at(self, path: &std::path::Path) -> Result<T, ProvisionError>;
}

impl<T> IoPath<T> for io::Result<T> {
    fn at(self, path: &std::path::Path) -> Result<T, ProvisionError> {
        self.map_err(|source| ProvisionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
