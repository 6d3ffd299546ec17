#![cfg(feature = "polars")]

use crate::data_types::RawTable;
use eyre::{Result, WrapErr};
use polars::prelude::*;
use std::path::Path;

/// Stringifies every cell of `df` so typing sees the same raw text a CSV
/// reader would. Nulls become empty cells.
pub fn table_from_frame(df: &DataFrame) -> Result<RawTable> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(columns.len()); df.height()];
    for column in df.get_columns() {
        let series = column
            .as_materialized_series()
            .cast(&DataType::String)
            .wrap_err_with(|| format!("column {} cannot be read as text", column.name()))?;
        let strings = series.str()?;
        for (row, value) in strings.into_iter().enumerate() {
            rows[row].push(value.unwrap_or_default().to_string());
        }
    }

    Ok(RawTable::new(columns, rows))
}

/// Reads a headed CSV file without schema inference: every column stays text.
pub fn read_csv(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .wrap_err_with(|| format!("cannot open {}", path.display()))?
        .finish()
        .wrap_err_with(|| format!("cannot parse {}", path.display()))?;
    table_from_frame(&df)
}
