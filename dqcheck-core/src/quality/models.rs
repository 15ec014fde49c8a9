//! Profiling result models.
//!
//! Everything here is computed once per analysis run from a table snapshot
//! and is immutable afterwards. Column order always matches the source table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ColumnType;

use super::score::{QualityScore, quality_score};

/// Missing-value metrics for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    /// Column name
    pub column_name: String,
    /// Count of missing cells
    pub missing_count: u64,
    /// Missing ratio (0.0-1.0)
    pub missing_fraction: f64,
}

impl ColumnMissing {
    /// Creates new column missing-value metrics.
    ///
    /// An empty column has a missing fraction of 0.0.
    pub fn new(column_name: impl Into<String>, missing_count: u64, total: u64) -> Self {
        let column_name = column_name.into();

        if missing_count > total {
            tracing::warn!(
                "Quality metrics anomaly: missing_count ({}) exceeds total ({}) for column '{}'",
                missing_count,
                total,
                column_name
            );
        }

        let missing_fraction = if total == 0 {
            0.0
        } else {
            missing_count as f64 / total as f64
        };

        Self {
            column_name,
            missing_count,
            missing_fraction: missing_fraction.clamp(0.0, 1.0),
        }
    }

    /// Missing ratio as a percentage (0.0-100.0).
    pub fn missing_percentage(&self) -> f64 {
        self.missing_fraction * 100.0
    }
}

/// Missing-value metrics for a whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessMetrics {
    /// Per-column metrics in table order
    pub column_metrics: Vec<ColumnMissing>,
    /// Total missing cells across all columns
    pub total_missing: u64,
}

/// Mean and sample standard deviation of a numeric column.
///
/// `None` marks an undefined statistic: no present values for the mean,
/// fewer than two present values for the standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Count of present values
    pub count: u64,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: Option<f64>,
}

/// Derived facts for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name
    pub column_name: String,
    /// Inferred type tag
    pub column_type: ColumnType,
    /// Missing ratio (0.0-1.0)
    pub missing_fraction: f64,
    /// Present only for numeric columns
    pub numeric: Option<NumericSummary>,
}

/// Structural profile of one CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Display name of the analysed file
    pub file_name: String,
    /// Row count before sampling
    pub original_row_count: u64,
    /// Row count the statistics were computed on
    pub analyzed_row_count: u64,
    /// Number of columns
    pub column_count: u64,
    /// Per-column statistics in table order
    pub columns: Vec<ColumnStats>,
    /// Rows identical to an earlier row
    pub duplicate_row_count: u64,
    /// Timestamp when analysis was performed
    pub analyzed_at: DateTime<Utc>,
}

impl ProfileReport {
    /// Column name → missing fraction, in table order.
    pub fn missing_fractions(&self) -> Vec<(&str, f64)> {
        self.columns
            .iter()
            .map(|c| (c.column_name.as_str(), c.missing_fraction))
            .collect()
    }

    /// Column name → type tag, in table order.
    pub fn column_types(&self) -> Vec<(&str, ColumnType)> {
        self.columns
            .iter()
            .map(|c| (c.column_name.as_str(), c.column_type))
            .collect()
    }

    /// Column name → numeric summary for numeric columns, in table order.
    pub fn numeric_summary(&self) -> Vec<(&str, &NumericSummary)> {
        self.columns
            .iter()
            .filter_map(|c| c.numeric.as_ref().map(|n| (c.column_name.as_str(), n)))
            .collect()
    }

    /// Mean of the per-column missing fractions, as a percentage.
    pub fn average_missing_percentage(&self) -> f64 {
        if self.columns.is_empty() {
            return 0.0;
        }
        let total: f64 = self.columns.iter().map(|c| c.missing_fraction).sum();
        total / self.columns.len() as f64 * 100.0
    }

    /// Quality score for this report.
    pub fn quality_score(&self) -> QualityScore {
        quality_score(self.average_missing_percentage(), self.duplicate_row_count)
    }
}
