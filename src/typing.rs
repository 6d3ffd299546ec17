//! Column type inference.

use crate::data_types::{CellValue, Dataset, DimensionDescriptor, Domain, RawTable};
use std::collections::BTreeSet;
use tracing::info;

/// Finite numeric parse of a raw cell. Surrounding whitespace is ignored.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Classifies every column and coerces the table into typed cells.
///
/// A column is numerical only when every row parses to a finite number; one
/// unparsable cell demotes the whole column to categorical. Never fails: an
/// empty table yields no dimensions.
pub fn infer(raw: RawTable) -> (Dataset, Vec<DimensionDescriptor>) {
    // Normalise ragged rows before indexing by column.
    let RawTable { columns, rows } = RawTable::new(raw.columns, raw.rows);

    if rows.is_empty() {
        return (Dataset::from_typed(columns, Vec::new()), Vec::new());
    }

    let numeric: Vec<bool> = (0..columns.len())
        .map(|col| rows.iter().all(|row| parse_number(&row[col]).is_some()))
        .collect();

    let typed_rows: Vec<Vec<CellValue>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&numeric)
                .map(|(raw, &is_num)| match (is_num, parse_number(&raw)) {
                    (true, Some(v)) => CellValue::Number(v),
                    _ => CellValue::Text(raw),
                })
                .collect()
        })
        .collect();

    let descriptors: Vec<DimensionDescriptor> = columns
        .iter()
        .enumerate()
        .map(|(col, name)| DimensionDescriptor {
            name: name.clone(),
            column: col,
            domain: column_domain(&typed_rows, col, numeric[col]),
        })
        .collect();

    info!(
        rows = typed_rows.len(),
        numerical = numeric.iter().filter(|n| **n).count(),
        categorical = numeric.iter().filter(|n| !**n).count(),
        "dataset typed"
    );

    (Dataset::from_typed(columns, typed_rows), descriptors)
}

fn column_domain(rows: &[Vec<CellValue>], col: usize, numeric: bool) -> Domain {
    if numeric {
        let (min, max) = rows
            .iter()
            .filter_map(|r| r[col].as_number())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        Domain::Numerical { min, max }
    } else {
        let distinct: BTreeSet<String> = rows.iter().map(|r| r[col].to_string()).collect();
        Domain::Categorical(distinct.into_iter().collect())
    }
}
