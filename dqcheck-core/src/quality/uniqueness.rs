//! Uniqueness analysis for data quality assessment.
//!
//! Counts rows whose full value tuple repeats an earlier row.

use std::collections::HashSet;

use crate::models::{CellValue, Table};

/// Hashable view of a cell for row comparison.
///
/// Numbers compare by bit pattern with `-0.0` folded into `0.0`. NaN never
/// reaches a table, so bit equality matches numeric equality.
#[derive(Debug, PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Missing,
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a CellValue> for CellKey<'a> {
    fn from(cell: &'a CellValue) -> Self {
        match cell {
            CellValue::Missing => CellKey::Missing,
            CellValue::Number(n) if *n == 0.0 => CellKey::Number(0.0_f64.to_bits()),
            CellValue::Number(n) => CellKey::Number(n.to_bits()),
            CellValue::Text(s) => CellKey::Text(s),
        }
    }
}

/// Counts duplicate rows in a table.
///
/// The first occurrence of a tuple is not counted; every later identical row
/// is. Missing cells compare equal to each other.
pub fn count_duplicate_rows(table: &Table) -> u64 {
    let row_count = table.row_count();
    let mut seen_rows: HashSet<Vec<CellKey<'_>>> = HashSet::with_capacity(row_count);
    let mut duplicate_count: u64 = 0;

    for index in 0..row_count {
        let key: Vec<CellKey<'_>> = table
            .columns()
            .iter()
            .filter_map(|column| column.cells().get(index))
            .map(CellKey::from)
            .collect();

        if !seen_rows.insert(key) {
            duplicate_count += 1;
        }
    }

    duplicate_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    #[test]
    fn test_no_duplicates() {
        let table = Table::new(vec![
            Column::numeric("id", vec![Some(1.0), Some(2.0), Some(3.0)]),
            Column::text("name", vec![Some("Alice"), Some("Bob"), Some("Charlie")]),
        ])
        .unwrap();

        assert_eq!(count_duplicate_rows(&table), 0);
    }

    #[test]
    fn test_exact_row_duplicates() {
        let table = Table::new(vec![
            Column::numeric("id", vec![Some(1.0), Some(1.0), Some(2.0), Some(1.0)]),
            Column::text("name", vec![Some("Alice"), Some("Alice"), Some("Bob"), Some("Alice")]),
        ])
        .unwrap();

        assert_eq!(count_duplicate_rows(&table), 2);
    }

    #[test]
    fn test_column_duplicates_alone_do_not_count() {
        let table = Table::new(vec![
            Column::numeric("id", vec![Some(1.0), Some(2.0)]),
            Column::text("status", vec![Some("active"), Some("active")]),
        ])
        .unwrap();

        assert_eq!(count_duplicate_rows(&table), 0);
    }

    #[test]
    fn test_missing_cells_compare_equal() {
        let table = Table::new(vec![
            Column::numeric("a", vec![None, None, Some(1.0)]),
            Column::text("b", vec![Some("x"), Some("x"), Some("x")]),
        ])
        .unwrap();

        assert_eq!(count_duplicate_rows(&table), 1);
    }

    #[test]
    fn test_signed_zero_is_equal() {
        let table = Table::new(vec![Column::numeric("v", vec![Some(0.0), Some(-0.0)])]).unwrap();
        assert_eq!(count_duplicate_rows(&table), 1);
    }

    #[test]
    fn test_text_and_missing_differ() {
        let table = Table::new(vec![Column::text("v", vec![Some(""), None])]).unwrap();
        assert_eq!(count_duplicate_rows(&table), 0);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(vec![Column::numeric("v", vec![])]).unwrap();
        assert_eq!(count_duplicate_rows(&table), 0);
    }

    #[test]
    fn test_all_rows_identical() {
        let table = Table::new(vec![Column::text("v", vec![Some("same"); 5])]).unwrap();
        assert_eq!(count_duplicate_rows(&table), 4);
    }
}
