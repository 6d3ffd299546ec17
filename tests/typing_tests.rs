mod common;

use common::table;
use pcp_chart::typing::{infer, parse_number};
use pcp_chart::{CellValue, DimensionKind, Domain, RawTable};

#[test]
fn test_single_unparsable_cell_demotes_column() {
    let raw = table(&["x"], &[&["3"], &["4"], &["abc"], &["6"]]);
    let (dataset, dims) = infer(raw);

    assert_eq!(dims.len(), 1);
    assert_eq!(dims[0].kind(), DimensionKind::Categorical);
    assert_eq!(
        dims[0].domain,
        Domain::Categorical(vec![
            "3".to_string(),
            "4".to_string(),
            "6".to_string(),
            "abc".to_string()
        ])
    );
    // Demoted cells keep their raw text, numbers included.
    assert_eq!(dataset.cell(0, 0), Some(&CellValue::Text("3".to_string())));
}

#[test]
fn test_numeric_column_is_coerced() {
    let raw = table(&["mpg", "name"], &[&["18", "a"], &[" 9.5 ", "b"], &["30", "c"]]);
    let (dataset, dims) = infer(raw);

    assert_eq!(dims[0].kind(), DimensionKind::Numerical);
    assert_eq!(dims[0].domain, Domain::Numerical { min: 9.5, max: 30.0 });
    assert_eq!(dims[1].kind(), DimensionKind::Categorical);
    assert_eq!(dataset.cell(1, 0), Some(&CellValue::Number(9.5)));
    assert_eq!(dataset.numbers(0).collect::<Vec<_>>(), vec![18.0, 9.5, 30.0]);
}

#[test]
fn test_non_finite_values_are_not_numeric() {
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("-1e3"), Some(-1000.0));

    let raw = table(&["x"], &[&["1"], &["inf"]]);
    let (_, dims) = infer(raw);
    assert_eq!(dims[0].kind(), DimensionKind::Categorical);
}

#[test]
fn test_empty_dataset_has_no_dimensions() {
    let (dataset, dims) = infer(RawTable::default());
    assert!(dims.is_empty());
    assert!(dataset.is_empty());

    // A header alone still yields nothing to scale.
    let (_, dims) = infer(table(&["a", "b"], &[]));
    assert!(dims.is_empty());
}

#[test]
fn test_records_missing_field_is_categorical() {
    let raw = RawTable::from_records(vec![
        vec![("MPG", "18"), ("Origin", "American")],
        vec![("Origin", "Japanese")],
    ]);
    assert_eq!(raw.columns, vec!["MPG".to_string(), "Origin".to_string()]);
    assert_eq!(raw.rows[1], vec![String::new(), "Japanese".to_string()]);

    let (_, dims) = infer(raw);
    assert_eq!(dims[0].kind(), DimensionKind::Categorical);
}

#[test]
fn test_ragged_rows_are_padded() {
    let raw = RawTable {
        columns: vec!["a".into(), "b".into()],
        rows: vec![vec!["1".into(), "2".into()], vec!["3".into()]],
    };
    let (dataset, dims) = infer(raw);
    assert_eq!(dims[0].kind(), DimensionKind::Numerical);
    assert_eq!(dims[1].kind(), DimensionKind::Categorical);
    assert_eq!(dataset.cell(1, 1), Some(&CellValue::Text(String::new())));
}
