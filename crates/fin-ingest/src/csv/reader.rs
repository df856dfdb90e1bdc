//! Delimited file reading with every column kept as text.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Maximum file size for table loading (500 MB default).
pub const MAX_TABLE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_TABLE_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Returns true when the file has a non-blank header line.
fn has_header_line(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut first = String::new();
    BufReader::new(file)
        .read_line(&mut first)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    let first = first.strip_prefix('\u{feff}').unwrap_or(&first);
    Ok(!first.trim().is_empty())
}

/// Reads a delimited file into a DataFrame of string columns.
///
/// Schema inference is disabled so cells such as `$1,200` or `(300)` arrive
/// exactly as written. Blank header names are replaced with `column_N`.
pub fn read_delimited(path: &Path, separator: u8) -> Result<DataFrame> {
    if !has_header_line(path)? {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    if df.width() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let blank: Vec<(usize, String)> = df
        .get_column_names()
        .iter()
        .enumerate()
        .filter(|(_, name)| name.trim().is_empty())
        .map(|(idx, name)| (idx, name.to_string()))
        .collect();
    for (idx, old) in blank {
        let new_name = format!("column_{}", idx + 1);
        tracing::debug!(path = %path.display(), column = idx, "renaming blank header");
        df.rename(&old, new_name.into()).map_err(parse_error)?;
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_delimited_keeps_text() {
        let file = create_temp_csv("Metric,2023\nRevenue,\"$1,200\"\nCosts,(300)\n");
        let df = read_delimited(file.path(), b',').unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        let col = df.column("2023").unwrap();
        assert_eq!(col.dtype(), &DataType::String);
        assert_eq!(col.str().unwrap().get(0), Some("$1,200"));
        assert_eq!(col.str().unwrap().get(1), Some("(300)"));
    }

    #[test]
    fn test_read_delimited_tab_separator() {
        let file = create_temp_csv("Metric\t2023\nRevenue\t1200\n");
        let df = read_delimited(file.path(), b'\t').unwrap();

        assert_eq!(df.width(), 2);
        assert_eq!(df.column("Metric").unwrap().str().unwrap().get(0), Some("Revenue"));
    }

    #[test]
    fn test_read_delimited_header_only() {
        let file = create_temp_csv("Metric,2023\n");
        let df = read_delimited(file.path(), b',').unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_read_delimited_empty_file() {
        let file = create_temp_csv("");
        let result = read_delimited(file.path(), b',');

        assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0x00]).unwrap();

        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_check_file_size_with_limit() {
        let file = create_temp_csv("A,B\n1,2\n");
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 2),
            Err(IngestError::FileTooLarge { max_size: 2, .. })
        ));
    }
}
