//! Completeness analysis for data quality assessment.
//!
//! This module counts missing cells per column of a loaded table.

use crate::models::Table;

use super::models::{ColumnMissing, CompletenessMetrics};

/// Analyzes completeness of a table.
///
/// Every column is reported, in table order. A zero-row table reports a
/// missing fraction of 0.0 for each column.
pub fn analyze_completeness(table: &Table) -> CompletenessMetrics {
    let total_rows = table.row_count() as u64;
    let mut column_metrics = Vec::with_capacity(table.column_count());
    let mut total_missing: u64 = 0;

    for column in table.columns() {
        let missing_count = column.missing_count() as u64;
        total_missing += missing_count;
        column_metrics.push(ColumnMissing::new(
            column.name(),
            missing_count,
            total_rows,
        ));
    }

    CompletenessMetrics {
        column_metrics,
        total_missing,
    }
}
