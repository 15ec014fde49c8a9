//! CSV table loader.
//!
//! Turns raw bytes into a typed [`Table`]. This is the only stage of the
//! pipeline that can reject input; every later stage is total.

use std::collections::{HashMap, HashSet};

use crate::error::{DqCheckError, Result, StructureError};
use crate::models::{Column, Table};

/// Field values treated as missing, in addition to the empty field.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Returns true if a raw field value is a missing marker.
pub fn is_missing_marker(value: &str) -> bool {
    value.is_empty() || NA_VALUES.contains(&value)
}

/// Rejects file names that do not carry a `.csv` extension.
pub fn validate_file_name(file_name: &str) -> Result<()> {
    if file_name.ends_with(".csv") {
        Ok(())
    } else {
        Err(DqCheckError::input_format("Only .csv files are supported."))
    }
}

/// Parses CSV bytes into a typed table.
///
/// The first record is the header. Records shorter than the header are padded
/// with missing cells; longer records are rejected. Blank lines are skipped.
///
/// # Errors
/// * [`DqCheckError::InputFormat`] if the content has no header record
/// * [`DqCheckError::Parse`] for invalid UTF-8 or over-long records
pub fn load_csv(content: &[u8]) -> Result<Table> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(|e| DqCheckError::parse_failed("Error reading CSV header", e))?
        .clone();

    if headers.is_empty() {
        return Err(DqCheckError::input_format("No columns to parse from file"));
    }

    let names = unique_column_names(headers.iter());
    let width = names.len();
    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); width];

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DqCheckError::parse_failed("Error reading CSV", e))?;

        if record.len() > width {
            let line = record
                .position()
                .map_or(index as u64 + 2, csv::Position::line);
            return Err(DqCheckError::parse_failed(
                "Error reading CSV",
                StructureError(format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    line,
                    record.len()
                )),
            ));
        }

        for (position, cells) in raw.iter_mut().enumerate() {
            let value = record
                .get(position)
                .filter(|value| !is_missing_marker(value))
                .map(str::to_owned);
            cells.push(value);
        }
    }

    let columns: Vec<Column> = names
        .into_iter()
        .zip(raw)
        .map(|(name, values)| Column::infer(name, values))
        .collect();

    let table = Table::new(columns)?;
    tracing::debug!(
        "Loaded CSV table with {} rows and {} columns",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

/// Produces unique column names from raw header fields.
///
/// Blank headers become `Unnamed: <index>`. A repeated name gets `.1`, `.2`,
/// ... appended to its later occurrences, skipping suffixes already taken.
fn unique_column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<String> = headers
        .enumerate()
        .map(|(index, header)| {
            if header.trim().is_empty() {
                format!("Unnamed: {}", index)
            } else {
                header.to_string()
            }
        })
        .collect();

    let mut taken: HashSet<String> = raw.iter().cloned().collect();
    let mut emitted: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for name in raw {
        if emitted.insert(name.clone()) {
            names.push(name);
            continue;
        }

        let counter = counters.entry(name.clone()).or_insert(0);
        let renamed = loop {
            *counter += 1;
            let candidate = format!("{}.{}", name, counter);
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        taken.insert(renamed.clone());
        emitted.insert(renamed.clone());
        names.push(renamed);
    }

    names
}
