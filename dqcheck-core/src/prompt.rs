//! Summarizer prompt construction.
//!
//! The instruction text is a fixed contract with the summarizer: it asks for
//! a markdown summary with full numeric tables and a closing three-row
//! recommendations table with fixed headers.

/// System role passed to summarizers that support one.
pub const SYSTEM_PROMPT: &str = "You are a professional data quality analyst.";

/// Header row of the closing recommendations table.
pub const RECOMMENDATIONS_HEADER: &str =
    "| S.No | Recommendation | Why it matters | How to implement |";

/// Title of the closing recommendations section.
pub const RECOMMENDATIONS_TITLE: &str = "🚀 3 Actionable Improvements";

/// Builds the full prompt for a rendered report.
pub fn build_prompt(rendered_report: &str) -> String {
    format!(
        "You are a data quality expert. Summarize this raw report clearly in markdown for a professional data-quality dashboard. \
Use well-formatted markdown tables with pipes (|) and proper headers. \
Include full numeric summaries, then finish with a section titled '{title}'. \
Render that section as a markdown table with these exact headers:\n\
{header}\n\
Number the S.No column as 1, 2, and 3. \
Keep the style professional and stop the output after the final table.\n\n\
{report}",
        title = RECOMMENDATIONS_TITLE,
        header = RECOMMENDATIONS_HEADER,
        report = rendered_report
    )
}
