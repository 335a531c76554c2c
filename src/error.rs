//! Error types for icon generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing icon files
///
/// Rendering itself cannot fail; every variant comes from persisting or
/// reporting the rendered output.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output directory could not be created
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// An icon file could not be written
    #[error("failed to write icon {size} to '{}': {source}", .path.display())]
    Write {
        size: u32,
        path: PathBuf,
        source: io::Error,
    },

    /// A progress line could not be written to the report sink
    #[error("failed to write progress report: {0}")]
    Report(#[from] io::Error),
}

impl GenerateError {
    /// Create a directory creation error
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn write(size: u32, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            size,
            path: path.into(),
            source,
        }
    }

    /// The icon size this error belongs to, if any
    pub fn size(&self) -> Option<u32> {
        match self {
            Self::Write { size, .. } => Some(*size),
            _ => None,
        }
    }
}
