//! Extension dispatch and the loaded-table wrapper.

use std::fmt;
use std::path::Path;

use polars::prelude::DataFrame;

use crate::csv::{check_file_size, read_delimited, validate_encoding};
use crate::error::{IngestError, Result};
use crate::excel::read_workbook;

/// Supported table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated (`.csv`, `.txt`).
    Csv,
    /// Tab-separated (`.tsv`).
    Tsv,
    /// Spreadsheet workbook (`.xlsx`, `.xlsm`, `.xls`), first sheet only.
    Excel,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" | "xlsm" | "xls" => Ok(Self::Excel),
            _ => Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    /// Field separator for delimited formats. Workbooks have none.
    pub fn separator(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Excel => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Excel => write!(f, "excel"),
        }
    }
}

/// A table read from disk, ready for profiling.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// File name without directories, used as the profile's source name.
    pub file_name: String,
    pub format: SourceFormat,
    pub frame: DataFrame,
}

/// Load a table file into a DataFrame of string columns.
///
/// Any failure here means no table exists; callers must surface it.
pub fn load_table(path: &Path) -> Result<LoadedTable> {
    let format = SourceFormat::from_path(path)?;
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    check_file_size(path)?;

    let frame = match format.separator() {
        Some(separator) => {
            validate_encoding(path)?;
            read_delimited(path, separator)?
        }
        None => read_workbook(path)?,
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!(
        file = %file_name,
        format = %format,
        rows = frame.height(),
        columns = frame.width(),
        "loaded table"
    );

    Ok(LoadedTable {
        file_name,
        format,
        frame,
    })
}
