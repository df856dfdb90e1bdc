//! Normalized table export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};

/// Writes a table as CSV with a header row.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .finish(df)
        .context("write csv")
}

/// Writes a table as CSV to `path`, or to stdout when no path is given.
pub fn export_csv(df: &mut DataFrame, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_csv(df, file)?;
            tracing::info!(path = %path.display(), rows = df.height(), "wrote normalized table");
        }
        None => write_csv(df, std::io::stdout().lock())?,
    }
    Ok(())
}
