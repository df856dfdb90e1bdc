//! First-sheet workbook reading.

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of a workbook into a DataFrame of string columns.
///
/// The first row holds the headers. Cells keep their displayed text, so a
/// numeric cell `1200` arrives as `"1200"` and an empty cell as null. Blank
/// header names are replaced with `column_N`.
pub fn read_workbook(path: &Path) -> Result<DataFrame> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyTable {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    if range.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let columns = sheet_columns(path, &range);
    let df = DataFrame::new(columns).map_err(|e| workbook_error(e.to_string()))?;
    if df.width() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(df)
}

fn sheet_columns(path: &Path, range: &Range<Data>) -> Vec<Column> {
    let mut rows = range.rows();
    let headers = rows.next().unwrap_or_default();
    let body: Vec<&[Data]> = rows.collect();

    let mut seen: HashMap<String, usize> = HashMap::new();
    (0..range.width())
        .map(|idx| {
            let name = match headers.get(idx).and_then(cell_text) {
                Some(text) if !text.trim().is_empty() => text,
                _ => {
                    tracing::debug!(path = %path.display(), column = idx, "renaming blank header");
                    format!("column_{}", idx + 1)
                }
            };
            let name = match seen.get_mut(&name) {
                Some(count) => {
                    let renamed = format!("{name}_duplicated_{count}");
                    *count += 1;
                    renamed
                }
                None => {
                    seen.insert(name.clone(), 0);
                    name
                }
            };
            let values: Vec<Option<String>> = body
                .iter()
                .map(|row| row.get(idx).and_then(cell_text))
                .collect();
            Series::new(name.into(), values).into_column()
        })
        .collect()
}

/// Cell text as a spreadsheet shows it. Empty cells are null.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
