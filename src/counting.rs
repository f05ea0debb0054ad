//! Frequency table construction from raw text
//!
//! Splits documents into lowercase tokens, counts them across the whole corpus
//! and writes a `token;frequency` table that [`crate::parsing`] can load.

use csv::WriterBuilder;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur while building a frequency table
#[derive(Error, Debug)]
pub enum CountingError {
    #[error("Failed to read corpus file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to write frequency table: {0}")]
    Csv(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, CountingError>;

/// Totals gathered while counting a corpus
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusSummary {
    pub documents: usize,
    pub bytes: usize,
    pub tokens: u64,
    pub distinct_tokens: usize,
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    token: &'a str,
    frequency: u64,
}

/// Splits `text` into lowercase tokens.
///
/// A token is a run of alphanumeric characters or `_`. A few separators are
/// kept when they sit inside a token:
/// - one `.` or `,` between digits (`3.14`, `1,5`)
/// - `-` before a digit at the start of a token (`-5`) or between letters (`e-mail`)
/// - `'` after any character when followed by an alphanumeric one (`don't`)
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut decimal_separators = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        let last = current.chars().last();

        let keep = if c.is_alphanumeric() || c == '_' {
            true
        } else {
            match c {
                '.' | ',' => {
                    decimal_separators == 0
                        && last.is_some_and(|l| l.is_ascii_digit())
                        && next.is_some_and(|n| n.is_ascii_digit())
                }
                '-' => match last {
                    None => next.is_some_and(|n| n.is_ascii_digit()),
                    Some(l) => l.is_alphabetic() && next.is_some_and(char::is_alphabetic),
                },
                '\'' => last.is_some() && next.is_some_and(char::is_alphanumeric),
                _ => false,
            }
        };

        if keep {
            if matches!(c, '.' | ',') {
                decimal_separators += 1;
            }
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
            decimal_separators = 0;
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Counts token occurrences across every document, ordered by token.
pub fn count_tokens<'a>(documents: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for document in documents {
        for token in tokenize(document) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// Writes `token;frequency` records in token order.
pub fn write_frequency_table(
    output_path: &Path,
    counts: &BTreeMap<String, u64>,
    delimiter: u8,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(output_path)?;

    for (token, &frequency) in counts {
        writer.serialize(TokenRecord { token, frequency })?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads every corpus file, counts its tokens and writes the frequency table.
///
/// Files are decoded as UTF-8; invalid sequences are replaced rather than
/// rejected.
///
/// # Arguments
/// * `corpus` - Text files forming a single corpus
/// * `output_path` - Where the `token;frequency` table is written
/// * `delimiter` - Field separator for the table
pub fn build_frequency_table(
    corpus: &[PathBuf],
    output_path: &Path,
    delimiter: u8,
) -> Result<CorpusSummary> {
    let start_time = Instant::now();

    let mut documents = Vec::with_capacity(corpus.len());
    for path in corpus {
        let bytes = fs::read(path)?;
        documents.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    let counts = count_tokens(documents.iter().map(String::as_str));
    write_frequency_table(output_path, &counts, delimiter)?;

    let summary = CorpusSummary {
        documents: documents.len(),
        bytes: documents.iter().map(String::len).sum(),
        tokens: counts.values().sum(),
        distinct_tokens: counts.len(),
    };

    let seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Counted {} tokens ({} distinct) in {} documents, {:.2} MB in {:.3} s",
        summary.tokens,
        summary.distinct_tokens,
        summary.documents,
        summary.bytes as f64 / 1024.0 / 1024.0,
        seconds
    );

    Ok(summary)
}
