//! Plain-text report rendering.
//!
//! The rendered text is raw material for the summarizer prompt, not
//! user-facing output: one `label: value` line per scalar, one aligned
//! `name  value` line per column, sections separated by a blank line.

use std::fmt;

use crate::quality::{NumericSummary, ProfileReport};

/// Literal used for undefined statistics.
pub const UNDEFINED: &str = "N/A";

/// Heading of the numeric summary section.
pub const NUMERIC_SUMMARY_HEADING: &str = "Numeric Summary:";

/// Display adapter that renders a [`ProfileReport`] as plain text.
///
/// Sections, in order: identity and counts, missing percentages, duplicate
/// rows, type tags, numeric summary. The numeric section is left out when
/// the table has no numeric columns.
#[derive(Debug, Clone, Copy)]
pub struct RenderedReport<'a>(pub &'a ProfileReport);

/// Renders a report to a string.
pub fn render_report(report: &ProfileReport) -> String {
    RenderedReport(report).to_string()
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let width = report
            .columns
            .iter()
            .map(|c| c.column_name.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "File Name: {}", report.file_name)?;
        writeln!(f, "Total Rows: {}", report.original_row_count)?;
        writeln!(f, "Columns: {}", report.column_count)?;
        writeln!(f)?;

        writeln!(f, "Missing Values (% per column):")?;
        for (name, fraction) in report.missing_fractions() {
            writeln!(f, "{:<width$}  {:.2}", name, fraction * 100.0, width = width)?;
        }
        writeln!(f)?;

        writeln!(f, "Duplicate Rows: {}", report.duplicate_row_count)?;
        writeln!(f)?;

        writeln!(f, "Data Types:")?;
        for (name, column_type) in report.column_types() {
            writeln!(f, "{:<width$}  {}", name, column_type, width = width)?;
        }
        writeln!(f)?;

        let numeric = report.numeric_summary();
        if !numeric.is_empty() {
            writeln!(f, "{}", NUMERIC_SUMMARY_HEADING)?;
            for (name, summary) in numeric {
                write_numeric_line(f, name, summary, width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_numeric_line(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    summary: &NumericSummary,
    width: usize,
) -> fmt::Result {
    writeln!(
        f,
        "{:<width$}  mean={}  std={}",
        name,
        format_statistic(summary.mean),
        format_statistic(summary.std_dev),
        width = width
    )
}

/// Magnitudes outside `[SCIENTIFIC_BELOW, SCIENTIFIC_FROM)` use scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;
const SCIENTIFIC_FROM: f64 = 1e15;

/// Formats a statistic with four decimals, or [`UNDEFINED`].
///
/// Non-zero values too small or too large for fixed notation are written as
/// `d.dddde±x` so they never collapse to `0.0000`.
pub fn format_statistic(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let magnitude = v.abs();
            if v != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude) {
                format!("{:.4e}", v)
            } else {
                format!("{:.4}", v)
            }
        }
        Some(v) if v.is_infinite() => {
            if v > 0.0 {
                "inf".to_string()
            } else {
                "-inf".to_string()
            }
        }
        _ => UNDEFINED.to_string(),
    }
}
