use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem failure on the input or output path.
///
/// Only two kinds are distinguished; everything else is `Unknown`.
#[derive(Debug, Error)]
pub enum IoFailure {
    #[error("No such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Unknown error: {}: {source}", path.display())]
    Unknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IoFailure {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => IoFailure::NotFound { path },
            io::ErrorKind::PermissionDenied => IoFailure::PermissionDenied { path },
            _ => IoFailure::Unknown { path, source: err },
        }
    }

    /// Errno-style code, also used as the process exit status.
    pub fn code(&self) -> i32 {
        match self {
            IoFailure::NotFound { .. } => 2,
            IoFailure::PermissionDenied { .. } => 13,
            IoFailure::Unknown { .. } => 1,
        }
    }

    /// Conventional name of the failure kind.
    pub fn name(&self) -> &'static str {
        match self {
            IoFailure::NotFound { .. } => "FileNotFoundError",
            IoFailure::PermissionDenied { .. } => "PermissionError",
            IoFailure::Unknown { .. } => "UnknownError",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            IoFailure::NotFound { path }
            | IoFailure::PermissionDenied { path }
            | IoFailure::Unknown { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for `{key}`: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Palette too large: depth sum {sum} exceeds limit {limit}")]
    TooLarge { sum: u32, limit: u32 },
}
