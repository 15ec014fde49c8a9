//! Data quality profiling module.
//!
//! This module turns a loaded table into a [`ProfileReport`]:
//! - **Completeness**: missing-value fraction per column
//! - **Uniqueness**: count of fully duplicated rows
//! - **Statistics**: mean and sample standard deviation of numeric columns
//! - **Score**: a bounded 0-100 heuristic derived from the above
//!
//! # Example
//! ```rust
//! use dqcheck_core::config::SamplingConfig;
//! use dqcheck_core::loader::load_csv;
//! use dqcheck_core::quality::profile_table;
//! use dqcheck_core::sampling::sample_table;
//!
//! let table = load_csv(b"id,name\n1,a\n2,\n").unwrap();
//! let sampled = sample_table(table, &SamplingConfig::default());
//! let report = profile_table("people.csv", &sampled);
//! assert_eq!(report.quality_score().value(), 87.5);
//! ```

mod completeness;
mod models;
mod profiler;
mod score;
mod statistics;
mod uniqueness;

pub use completeness::analyze_completeness;
pub use models::{ColumnMissing, ColumnStats, CompletenessMetrics, NumericSummary, ProfileReport};
pub use profiler::profile_table;
pub use score::{DUPLICATE_PENALTY, MAX_SCORE, MISSING_PENALTY, QualityScore, quality_score};
pub use statistics::summarize_numeric;
pub use uniqueness::count_duplicate_rows;
