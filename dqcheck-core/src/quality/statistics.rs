//! Numeric column statistics.

use super::models::NumericSummary;

/// Calculates mean and sample standard deviation for a set of values.
///
/// The standard deviation uses the `n - 1` denominator and is undefined for
/// fewer than two values. The mean is undefined for an empty slice. Results
/// that come out as NaN (for example from mixed infinities) are reported as
/// undefined rather than propagated.
pub fn summarize_numeric(values: &[f64]) -> NumericSummary {
    let count = values.len() as u64;

    if values.is_empty() {
        return NumericSummary {
            count,
            mean: None,
            std_dev: None,
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let std_dev = if values.len() < 2 {
        None
    } else {
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(variance.sqrt())
    };

    NumericSummary {
        count,
        mean: defined(mean),
        std_dev: std_dev.and_then(defined),
    }
}

fn defined(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}
