//! Error types for table loading.
//!
//! Every variant is a load failure: the caller gets no table and must surface
//! the error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// File extension is not a supported table format.
    #[error("unsupported file extension '{extension}' for {path}")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// File uses an encoding we cannot read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse the file with Polars.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a spreadsheet workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// File has no columns.
    #[error("no table found in {path}")]
    EmptyTable { path: PathBuf },
}

impl IngestError {
    /// The file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::UnsupportedExtension { path, .. }
            | Self::UnsupportedEncoding { path, .. }
            | Self::CsvParse { path, .. }
            | Self::Workbook { path, .. }
            | Self::EmptyTable { path } => path,
        }
    }

    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/exports/q4.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /exports/q4.csv");
    }

    #[test]
    fn test_from_io_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(std::path::Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::from_io(std::path::Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
        assert_eq!(err.path(), &PathBuf::from("a.csv"));
    }
}
