//! Frequency table loading
//!
//! This module reads delimited term-frequency tables (such as `freq.csv`) into a
//! [`FrequencyTable`]. Only the `frequency` column is required; a term column is
//! picked up when one is present.

use crate::common::{FrequencyRow, FrequencyTable};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Name of the header field holding the counts
pub const FREQUENCY_COLUMN: &str = "frequency";

/// Header names recognised as the term column, in order of preference
const TERM_COLUMNS: [&str; 2] = ["token", "term"];

/// Errors that can occur while loading a frequency table
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input header has no '{0}' column")]
    MissingColumn(String),

    #[error("Record on line {line} has no frequency value")]
    MissingValue { line: u64 },

    #[error("Record on line {line} has invalid frequency '{value}'")]
    InvalidFrequency { line: u64, value: String },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Load a frequency table from a delimited text file
///
/// # Arguments
/// * `file_path` - Path to the table, e.g. `freq.csv`
/// * `delimiter` - Field separator byte, e.g. `b';'`
///
/// # Returns
/// * `Ok(FrequencyTable)` - Rows in input order
/// * `Err(ParsingError)` - If the file is missing or malformed
pub fn load_frequency_table(file_path: &Path, delimiter: u8) -> Result<FrequencyTable> {
    let file = File::open(file_path)?;
    parse_frequency_table(file, delimiter)
}

/// Parse a frequency table from any reader
///
/// The first record is the header and must contain a field named exactly
/// `frequency`. Header names are matched verbatim; surrounding whitespace is
/// only trimmed from record values. Records may have uneven widths; only the
/// frequency field is validated.
pub fn parse_frequency_table<R: Read>(source: R, delimiter: u8) -> Result<FrequencyTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let frequency_index = find_column(&headers, FREQUENCY_COLUMN)
        .ok_or_else(|| ParsingError::MissingColumn(FREQUENCY_COLUMN.to_string()))?;
    let term_index = find_term_column(&headers, frequency_index);
    debug!(
        "frequency column at index {}, term column {:?}",
        frequency_index, term_index
    );

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());

        let value = record
            .get(frequency_index)
            .ok_or(ParsingError::MissingValue { line })?;
        let frequency = parse_frequency(value).ok_or_else(|| ParsingError::InvalidFrequency {
            line,
            value: value.to_string(),
        })?;

        let term = term_index
            .and_then(|index| record.get(index))
            .map_or_else(|| line.to_string(), str::to_string);

        rows.push(FrequencyRow::new(term, frequency));
    }

    Ok(FrequencyTable::new(rows))
}

/// Counts must be finite and non-negative; integers and reals are both accepted.
fn parse_frequency(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|frequency| frequency.is_finite() && *frequency >= 0.0)
        // -0 becomes 0 so it ties with 0 under total ordering
        .map(|frequency| frequency + 0.0)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}') == name)
}

fn find_term_column(headers: &StringRecord, frequency_index: usize) -> Option<usize> {
    TERM_COLUMNS
        .iter()
        .find_map(|name| find_column(headers, name))
        .or_else(|| (0..headers.len()).find(|&index| index != frequency_index))
}
