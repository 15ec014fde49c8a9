//! Heuristic quality score.
//!
//! ```text
//! score = 100 - avg_missing_pct * 0.5 - duplicate_count * 0.1
//! ```
//! clamped to `[0, 100]` and rounded to two decimals.

use serde::{Deserialize, Serialize};

/// Penalty per percentage point of average missingness.
pub const MISSING_PENALTY: f64 = 0.5;

/// Penalty per duplicate row.
pub const DUPLICATE_PENALTY: f64 = 0.1;

/// Score for a dataset with no missing values and no duplicates.
pub const MAX_SCORE: f64 = 100.0;

/// A quality score in `[0, 100]` with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityScore(f64);

impl QualityScore {
    /// The raw score.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for QualityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Computes the quality score.
///
/// # Arguments
/// * `average_missing_percentage` - Mean of per-column missing fractions, in percent
/// * `duplicate_row_count` - Rows identical to an earlier row
pub fn quality_score(average_missing_percentage: f64, duplicate_row_count: u64) -> QualityScore {
    let raw = MAX_SCORE
        - average_missing_percentage * MISSING_PENALTY
        - duplicate_row_count as f64 * DUPLICATE_PENALTY;

    // NaN only arises from a NaN percentage; treat it as the worst case.
    let clamped = if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_SCORE)
    };

    QualityScore(round2(clamped))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_score() {
        assert_eq!(quality_score(0.0, 0).value(), 100.0);
    }

    #[test]
    fn test_missing_penalty() {
        assert_eq!(quality_score(20.0 / 3.0, 0).value(), 96.67);
    }

    #[test]
    fn test_duplicate_penalty() {
        assert_eq!(quality_score(0.0, 5).value(), 99.5);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        assert_eq!(quality_score(100.0, 10_000).value(), 0.0);
        assert_eq!(quality_score(0.0, 2_000).value(), 0.0);
    }

    #[test]
    fn test_all_missing_scores_fifty() {
        assert_eq!(quality_score(100.0, 0).value(), 50.0);
    }

    #[test]
    fn test_nan_percentage_is_worst_case() {
        assert_eq!(quality_score(f64::NAN, 0).value(), 0.0);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(quality_score(0.0, 5).to_string(), "99.50");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&quality_score(0.0, 5)).unwrap();
        assert_eq!(json, "99.5");
    }
}
