use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed cell, produced once by the typing pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Untyped input table: every cell is the raw string read from the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table from a header and row-major cells.
    /// Short rows are padded with empty cells, long rows are truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Builds a table from ordered `(column, raw)` records.
    /// The column set is taken from the first record.
    pub fn from_records<I, R, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::new();

        for (i, record) in records.into_iter().enumerate() {
            let pairs: Vec<(String, String)> = record
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect();

            if i == 0 {
                columns = pairs.iter().map(|(k, _)| k.clone()).collect();
            }

            let row = columns
                .iter()
                .map(|col| {
                    pairs
                        .iter()
                        .find(|(k, _)| k == col)
                        .map(|(_, v)| v.clone())
                        .unwrap_or_default()
                })
                .collect();
            rows.push(row);
        }

        Self { columns, rows }
    }

    /// Parses a JSON array of flat objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).wrap_err("dataset is not valid JSON")?;
        let serde_json::Value::Array(items) = value else {
            bail!("dataset JSON must be an array of records");
        };

        let mut records = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            let serde_json::Value::Object(map) = item else {
                bail!("record {} is not a JSON object", i);
            };
            let record: Vec<(String, String)> = map
                .into_iter()
                .map(|(k, v)| (k, json_cell_to_raw(v)))
                .collect();
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn json_cell_to_raw(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Typed dataset. Immutable once built by the typing pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub(crate) fn from_typed(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Value of `column` in row `index`.
    pub fn cell(&self, index: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(index).and_then(|r| r.get(column))
    }

    /// Numeric values of a column, skipping text cells.
    pub fn numbers(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows
            .iter()
            .filter_map(move |r| r.get(column).and_then(CellValue::as_number))
    }
}
