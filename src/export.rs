//! Ranked table export
//!
//! Writes the ranked table next to its theoretical values. The output keeps a
//! `frequency` column, so it can be fed straight back into
//! [`crate::parsing::load_frequency_table`].

use crate::common::{RankedTable, ZipfCurve};
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting the ranked table
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to serialize ranked table: {0}")]
    Csv(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, ExportError>;

#[derive(Debug, Serialize)]
struct RankedRecord<'a> {
    rank: usize,
    term: &'a str,
    frequency: f64,
    theoretical: f64,
}

/// Writes `rank;term;frequency;theoretical` records for every rank.
pub fn write_ranked_table(
    output_path: &Path,
    ranked: &RankedTable,
    curve: &ZipfCurve,
    delimiter: u8,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(output_path)?;

    for ((row, &theoretical), rank) in ranked
        .rows()
        .iter()
        .zip(curve.values.iter())
        .zip(ranked.ranks())
    {
        writer.serialize(RankedRecord {
            rank,
            term: &row.term,
            frequency: row.frequency,
            theoretical,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{rank_by_frequency, zipf_curve};
    use crate::common::{FrequencyRow, FrequencyTable};
    use crate::parsing::{load_frequency_table, parse_frequency_table};
    use std::fs;

    fn ranked_input() -> RankedTable {
        let table = parse_frequency_table(
            "token;frequency\nthe;90\nof;40\nand;40\nzipf;0.5\nnever;0\n".as_bytes(),
            b';',
        )
        .unwrap();
        rank_by_frequency(table)
    }

    #[test]
    fn test_write_ranked_table_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranked.csv");
        let ranked = rank_by_frequency(FrequencyTable::new(vec![
            FrequencyRow::new("b", 5.0),
            FrequencyRow::new("a", 10.0),
        ]));
        let curve = zipf_curve(&ranked).unwrap();

        write_ranked_table(&path, &ranked, &curve, b';').unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "rank;term;frequency;theoretical");
        assert_eq!(lines[1], "1;a;10.0;10.0");
        assert_eq!(lines[2], "2;b;5.0;5.0");
    }

    #[test]
    fn test_exported_table_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranked.csv");
        let ranked = ranked_input();
        let curve = zipf_curve(&ranked).unwrap();

        write_ranked_table(&path, &ranked, &curve, b';').unwrap();

        let reloaded = rank_by_frequency(load_frequency_table(&path, b';').unwrap());
        assert_eq!(reloaded, ranked);
        assert_eq!(zipf_curve(&reloaded).unwrap(), curve);
    }

    #[test]
    fn test_write_ranked_table_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ranked.csv");
        let ranked = ranked_input();
        let curve = zipf_curve(&ranked).unwrap();

        let result = write_ranked_table(&path, &ranked, &curve, b';');
        assert!(result.is_err());
    }
}
