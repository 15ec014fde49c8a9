//! Table profiler.
//!
//! Combines the completeness, uniqueness and numeric analyses into one
//! [`ProfileReport`].

use chrono::Utc;

use crate::models::ColumnType;
use crate::sampling::SampledTable;

use super::completeness::analyze_completeness;
use super::models::{ColumnStats, ProfileReport};
use super::statistics::summarize_numeric;
use super::uniqueness::count_duplicate_rows;

/// Profiles a (possibly sampled) table.
///
/// All statistics are computed on `sampled.table`; only the reported
/// original row count comes from before sampling.
pub fn profile_table(file_name: &str, sampled: &SampledTable) -> ProfileReport {
    let table = &sampled.table;

    let completeness = analyze_completeness(table);
    let duplicate_row_count = count_duplicate_rows(table);

    let columns: Vec<ColumnStats> = table
        .columns()
        .iter()
        .zip(completeness.column_metrics)
        .map(|(column, missing)| {
            let numeric = match column.column_type() {
                ColumnType::Numeric => Some(summarize_numeric(&column.numeric_values())),
                ColumnType::NonNumeric => None,
            };
            ColumnStats {
                column_name: missing.column_name,
                column_type: column.column_type(),
                missing_fraction: missing.missing_fraction,
                numeric,
            }
        })
        .collect();

    tracing::debug!(
        "Profiled '{}': {} columns, {} missing cells, {} duplicate rows",
        file_name,
        columns.len(),
        completeness.total_missing,
        duplicate_row_count
    );

    ProfileReport {
        file_name: file_name.to_string(),
        original_row_count: sampled.original_row_count as u64,
        analyzed_row_count: table.row_count() as u64,
        column_count: table.column_count() as u64,
        columns,
        duplicate_row_count,
        analyzed_at: Utc::now(),
    }
}
