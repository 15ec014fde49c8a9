//! Core table model.
//!
//! A [`Table`] is an ordered list of named, typed columns. Each column's
//! [`ColumnType`] is decided once when the column is built and never changes,
//! so downstream analysis matches on the tag instead of re-inspecting cells.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DqCheckError, Result};

/// Inferred type tag for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    /// Every non-missing value is an integer or floating-point literal
    Numeric,
    /// Anything else: text, dates, booleans, mixed content
    NonNumeric,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::NonNumeric => write!(f, "non-numeric"),
        }
    }
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Missing/null marker
    Missing,
    /// Finite or infinite number (never NaN)
    Number(f64),
    /// Raw text
    Text(String),
}

impl CellValue {
    /// Returns true for the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Named column with a frozen type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    cells: Vec<CellValue>,
}

impl Column {
    /// Builds a numeric column. `NaN` inputs are stored as missing.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let cells = values
            .into_iter()
            .map(|value| match value {
                Some(n) if !n.is_nan() => CellValue::Number(n),
                _ => CellValue::Missing,
            })
            .collect();
        Self {
            name: name.into(),
            column_type: ColumnType::Numeric,
            cells,
        }
    }

    /// Builds a non-numeric column, keeping every present value as text.
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        let cells = values
            .into_iter()
            .map(|value| value.map_or(CellValue::Missing, |s| CellValue::Text(s.into())))
            .collect();
        Self {
            name: name.into(),
            column_type: ColumnType::NonNumeric,
            cells,
        }
    }

    /// Builds a column from raw field values and infers its type.
    ///
    /// The column is numeric when every present value parses as a number
    /// (surrounding whitespace ignored). A column with no present values at
    /// all is numeric as well.
    pub fn infer(name: impl Into<String>, raw: Vec<Option<String>>) -> Self {
        let parsed: Option<Vec<Option<f64>>> = raw
            .iter()
            .map(|value| match value {
                None => Some(None),
                Some(text) => parse_number(text).map(Some),
            })
            .collect();

        match parsed {
            Some(values) => Self::numeric(name, values),
            None => Self::text(name, raw),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frozen type tag.
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Cells in row order.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Count of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }

    /// Present numeric values in row order. Empty for non-numeric columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(CellValue::as_number).collect()
    }

    fn select(&self, indices: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            column_type: self.column_type,
            cells: indices
                .iter()
                .filter_map(|&i| self.cells.get(i).cloned())
                .collect(),
        }
    }
}

/// Parses a numeric literal the way the loader does.
///
/// Returns `None` for anything that is not an integer or float literal, and
/// for literals that evaluate to NaN.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}

/// An ordered collection of equally long, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table, checking column lengths and name uniqueness.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(DqCheckError::input_format(format!(
                    "column '{}' has {} values, expected {}",
                    bad.name(),
                    bad.len(),
                    expected
                )));
            }
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(DqCheckError::input_format(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Number of rows (0 for a table without columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cells of one row in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .filter_map(|column| column.cells().get(index))
                .collect(),
        )
    }

    /// Builds a new table from the given row indices, in the given order.
    ///
    /// Out-of-range indices are skipped. Column types carry over unchanged.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let row_count = self.row_count();
        let valid: Vec<usize> = indices.iter().copied().filter(|&i| i < row_count).collect();
        Self {
            columns: self.columns.iter().map(|c| c.select(&valid)).collect(),
        }
    }
}
