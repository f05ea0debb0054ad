//! Console summary of the highest ranks
//!
//! This module provides a side-by-side view of observed and theoretical
//! frequencies for the top of the ranking:
//! - [`RankEntry`] type for a single rank
//! - ASCII table formatting using the [`tabled`] crate

use crate::common::plots::format_constant;
use crate::common::{RankedTable, ZipfCurve};
use tabled::{Table, Tabled};

/// Represents a single rank with its observed and theoretical frequency
#[derive(Debug, Clone, Tabled)]
pub struct RankEntry {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Term")]
    pub term: String,
    #[tabled(rename = "Frequency")]
    pub frequency: String,
    /// Theoretical frequency `C / rank`
    #[tabled(rename = "Zipf")]
    pub theoretical: String,
    /// Observed divided by theoretical frequency
    #[tabled(rename = "Ratio")]
    pub ratio: String,
}

impl RankEntry {
    pub fn new(rank: usize, term: &str, frequency: f64, theoretical: f64) -> Self {
        let ratio = if theoretical == 0.0 {
            "-".to_string()
        } else {
            format!("{:.2}", frequency / theoretical)
        };

        Self {
            rank,
            term: term.to_string(),
            frequency: format_constant(frequency),
            theoretical: format!("{:.2}", theoretical),
            ratio,
        }
    }
}

/// Builds entries for the first `limit` ranks
pub fn create_rank_entries(ranked: &RankedTable, curve: &ZipfCurve, limit: usize) -> Vec<RankEntry> {
    ranked
        .rows()
        .iter()
        .zip(curve.values.iter())
        .zip(ranked.ranks())
        .take(limit)
        .map(|((row, &theoretical), rank)| {
            RankEntry::new(rank, &row.term, row.frequency, theoretical)
        })
        .collect()
}

/// Formats rank entries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `entries` - A slice of [`RankEntry`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_rank_table(entries: &[RankEntry], title: Option<&str>) -> String {
    if entries.is_empty() {
        return "No ranked terms available".to_string();
    }

    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
